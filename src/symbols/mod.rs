//! Ticker symbol name lookup.
//!
//! The registry treats "no name found" as "use the ticker" and never
//! blocks on this lookup.

/// Trait defining the contract for the name-lookup collaborator.
pub trait SymbolLookupTrait: Send + Sync {
    /// Returns a display name for the ticker, if one is known.
    fn display_name(&self, ticker: &str) -> Option<String>;
}

/// Lookup backed by a built-in table of common dividend-paying tickers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSymbolLookup;

/// Lookup that never resolves a name; callers fall back to the ticker.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSymbolLookup;

const SYMBOL_TABLE: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("ABBV", "AbbVie Inc."),
    ("CVX", "Chevron Corporation"),
    ("IBM", "International Business Machines"),
    ("JNJ", "Johnson & Johnson"),
    ("JPM", "JPMorgan Chase & Co."),
    ("KO", "The Coca-Cola Company"),
    ("MMM", "3M Company"),
    ("MSFT", "Microsoft Corporation"),
    ("O", "Realty Income Corporation"),
    ("PEP", "PepsiCo, Inc."),
    ("PG", "The Procter & Gamble Company"),
    ("SCHD", "Schwab U.S. Dividend Equity ETF"),
    ("T", "AT&T Inc."),
    ("VYM", "Vanguard High Dividend Yield ETF"),
    ("VZ", "Verizon Communications Inc."),
    ("XOM", "Exxon Mobil Corporation"),
];

impl SymbolLookupTrait for StaticSymbolLookup {
    fn display_name(&self, ticker: &str) -> Option<String> {
        let normalized = ticker.trim().to_uppercase();
        SYMBOL_TABLE
            .iter()
            .find(|(symbol, _)| *symbol == normalized)
            .map(|(_, name)| (*name).to_string())
    }
}

impl SymbolLookupTrait for NullSymbolLookup {
    fn display_name(&self, _ticker: &str) -> Option<String> {
        None
    }
}
