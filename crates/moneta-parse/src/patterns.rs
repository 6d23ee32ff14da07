//! The ordered recognizer/extractor rules for textual money shapes.
//!
//! Four shapes are supported, tried strictly in this order with the first
//! full match winning:
//!
//! 1. `-£123.00` — optional sign, symbol, number
//! 2. `EUR 123` — literal code, optional space, signed number
//! 3. `97GBP` — signed number, optional space, literal code
//! 4. `-123.00 £` — signed number, optional space, symbol
//!
//! The numeric sub-pattern `\d*\.?\d*\d` requires at least one digit, so a
//! bare sign or decimal point never matches. A structural match whose
//! numeric text still fails float conversion falls through to the next rule.

use regex::Regex;

use moneta_standards::SymbolTable;

/// A pattern failed to compile. Only reachable when the symbol table feeds
/// the character class something regex-hostile, which the table's exclusion
/// rules are there to prevent.
#[derive(Debug, thiserror::Error)]
#[error("failed to compile money pattern for {shape}: {source}")]
pub struct PatternError {
    shape: &'static str,
    #[source]
    source: regex::Error,
}

/// The pure extraction strategy paired with each recognizer.
///
/// Capture-group layout is fixed per variant; no closures are involved, so
/// rule ordering and first-match-wins stay explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// Groups: (sign)(symbol)(magnitude). Sign and magnitude are
    /// concatenated before parsing so the decimal text is preserved exactly.
    SignSymbolAmount,
    /// Groups: (code)(signed number).
    CodeAmount,
    /// Groups: (signed number)(code).
    AmountCode,
    /// Groups: (signed number)(symbol).
    AmountSymbol,
}

/// The currency half of an extraction: either a glyph still to be resolved
/// through the symbol table, or a literal 3-letter code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyToken {
    Symbol(char),
    Code(String),
}

/// One recognizer/extractor rule.
#[derive(Debug)]
pub struct PatternRule {
    regex: Regex,
    extractor: Extractor,
}

impl PatternRule {
    fn compile(shape: &'static str, pattern: &str, extractor: Extractor) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError { shape, source })?;
        Ok(Self { regex, extractor })
    }

    /// Runs the recognizer and, on a full match, the extractor.
    ///
    /// Returns `None` both when the recognizer does not match and when the
    /// captured numeric text fails conversion, letting the caller fall
    /// through to the next rule.
    pub fn extract(&self, text: &str) -> Option<(f64, CurrencyToken)> {
        let caps = self.regex.captures(text)?;
        match self.extractor {
            Extractor::SignSymbolAmount => {
                let number = format!("{}{}", &caps[1], &caps[3]);
                let amount = number.parse::<f64>().ok()?;
                let glyph = caps[2].chars().next()?;
                Some((amount, CurrencyToken::Symbol(glyph)))
            }
            Extractor::CodeAmount => {
                let amount = caps[2].parse::<f64>().ok()?;
                Some((amount, CurrencyToken::Code(caps[1].to_string())))
            }
            Extractor::AmountCode => {
                let amount = caps[1].parse::<f64>().ok()?;
                Some((amount, CurrencyToken::Code(caps[2].to_string())))
            }
            Extractor::AmountSymbol => {
                let amount = caps[1].parse::<f64>().ok()?;
                let glyph = caps[2].chars().next()?;
                Some((amount, CurrencyToken::Symbol(glyph)))
            }
        }
    }
}

/// The compiled rules, in match order.
#[derive(Debug)]
pub struct PatternSet {
    rules: Vec<PatternRule>,
}

impl PatternSet {
    /// Compiles the rule set against the glyphs of a symbol table.
    ///
    /// With an empty table the two symbol-based rules are omitted (an empty
    /// character class cannot match anything); the code-based rules keep
    /// their relative order either way.
    pub fn compile(symbols: &SymbolTable) -> Result<Self, PatternError> {
        let class: String = symbols.glyphs().map(|g| regex::escape(&g.to_string())).collect();
        let mut rules = Vec::with_capacity(4);
        if !class.is_empty() {
            rules.push(PatternRule::compile(
                "symbol-amount",
                &format!(r"^(-?)([{class}])(\d*\.?\d*\d)$"),
                Extractor::SignSymbolAmount,
            )?);
        }
        rules.push(PatternRule::compile(
            "code-amount",
            r"^([A-Z]{3})\s*(-?\d*\.?\d*\d)$",
            Extractor::CodeAmount,
        )?);
        rules.push(PatternRule::compile(
            "amount-code",
            r"^(-?\d*\.?\d*\d)\s*([A-Z]{3})$",
            Extractor::AmountCode,
        )?);
        if !class.is_empty() {
            rules.push(PatternRule::compile(
                "amount-symbol",
                &format!(r"^(-?\d*\.?\d*\d)\s*([{class}])$"),
                Extractor::AmountSymbol,
            )?);
        }
        Ok(Self { rules })
    }

    /// First-match-wins extraction over the ordered rules.
    pub fn first_match(&self, text: &str) -> Option<(f64, CurrencyToken)> {
        self.rules.iter().find_map(|rule| rule.extract(text))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{CurrencyToken, PatternSet};
    use moneta_standards::SymbolTable;

    fn set() -> PatternSet {
        let table = SymbolTable::load_default().expect("embedded metadata");
        PatternSet::compile(&table).expect("compile patterns")
    }

    #[test]
    fn four_rules_compile_against_the_default_table() {
        assert_eq!(set().len(), 4);
    }

    #[test]
    fn symbol_prefix_with_sign() {
        let (amount, token) = set().first_match("-£123.00").expect("match");
        assert_eq!(amount, -123.0);
        assert_eq!(token, CurrencyToken::Symbol('£'));
    }

    #[test]
    fn code_prefix_with_and_without_space() {
        let (amount, token) = set().first_match("EUR 123").expect("match");
        assert_eq!(amount, 123.0);
        assert_eq!(token, CurrencyToken::Code("EUR".to_string()));
        let (amount, _) = set().first_match("EUR-12.5").expect("match");
        assert_eq!(amount, -12.5);
    }

    #[test]
    fn code_suffix() {
        let (amount, token) = set().first_match("97GBP").expect("match");
        assert_eq!(amount, 97.0);
        assert_eq!(token, CurrencyToken::Code("GBP".to_string()));
    }

    #[test]
    fn symbol_suffix() {
        let (amount, token) = set().first_match("-123.00 £").expect("match");
        assert_eq!(amount, -123.0);
        assert_eq!(token, CurrencyToken::Symbol('£'));
    }

    #[test]
    fn fractional_without_leading_digit() {
        let (amount, _) = set().first_match("£.50").expect("match");
        assert_eq!(amount, 0.5);
    }

    #[test]
    fn partial_and_bare_inputs_do_not_match() {
        let patterns = set();
        assert!(patterns.first_match("£").is_none());
        assert!(patterns.first_match("-£").is_none());
        assert!(patterns.first_match("EUR").is_none());
        assert!(patterns.first_match("123").is_none());
        assert!(patterns.first_match("£123 and change").is_none());
    }
}
