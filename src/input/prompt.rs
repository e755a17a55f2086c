//! Terminal prompting for a single-material layup
//!
//! Entry and re-entry are handled by `dialoguer`: an entry that does not
//! parse or fails its validator is reported and asked for again.

use std::str::FromStr;

use dialoguer::console::Term;
use dialoguer::Input;

use crate::elements::PlySpec;
use crate::error::{CLTError, CLTResult};
use crate::layup::Layup;

/// Accept any finite number
pub fn validate_finite(value: &f64) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("'{value}' is not a finite number"))
    }
}

/// Accept finite numbers strictly greater than zero
pub fn validate_positive(value: &f64) -> Result<(), String> {
    validate_finite(value)?;
    if *value > 0.0 {
        Ok(())
    } else {
        Err("value must be greater than zero".to_string())
    }
}

/// A laminate needs at least one ply
pub fn validate_ply_count(count: &usize) -> Result<(), String> {
    if *count > 0 {
        Ok(())
    } else {
        Err("number of plies must be a positive integer".to_string())
    }
}

fn prompt_error(e: dialoguer::Error) -> CLTError {
    CLTError::IoError(std::io::Error::other(e))
}

/// Interactive layup entry on a terminal
pub struct Prompter {
    term: Term,
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter {
    /// Prompt on stderr so stdout stays free for the report
    pub fn new() -> Self {
        Self::with_term(Term::stderr())
    }

    pub fn with_term(term: Term) -> Self {
        Self { term }
    }

    fn ask<T, V>(&self, label: &str, validator: V) -> CLTResult<T>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: ToString,
        V: FnMut(&T) -> Result<(), String>,
    {
        Input::<T>::new()
            .with_prompt(label)
            .validate_with(validator)
            .interact_text_on(&self.term)
            .map_err(prompt_error)
    }

    /// Ask until a finite number is entered
    pub fn number(&self, label: &str) -> CLTResult<f64> {
        self.ask(label, validate_finite)
    }

    /// Ask until a strictly positive number is entered
    pub fn positive(&self, label: &str) -> CLTResult<f64> {
        self.ask(label, validate_positive)
    }

    /// Ask until a positive integer is entered
    pub fn count(&self, label: &str) -> CLTResult<usize> {
        self.ask(label, validate_ply_count)
    }

    /// Ask for `len` numbers in turn
    pub fn numbers(&self, label: &str, len: usize) -> CLTResult<Vec<f64>> {
        self.term.write_line(&format!("{label} ({len} values)"))?;
        (1..=len)
            .map(|i| self.number(&format!("  value {i}")))
            .collect()
    }

    /// Prompt for a single-material layup
    pub fn layup(&self) -> CLTResult<Layup> {
        let e_l = self.positive("E_l (e.g. 140e9)")?;
        let e_t = self.positive("E_t (e.g. 5e9)")?;
        let nu_lt = self.number("nu_lt (e.g. 0.35)")?;
        let g_lt = self.positive("G_lt (e.g. 5e9)")?;
        let count = self.count("number of plies (e.g. 4)")?;
        let angles = self.numbers("fiber angle of each ply in degrees (e.g. 0, 45, 90)", count)?;
        let thickness = self.positive("ply thickness (e.g. 0.25e-3)")?;

        let ply = PlySpec::new(e_l, e_t, g_lt, nu_lt, 0.0, thickness)?;
        Ok(Layup::new(ply).with_angles(&angles))
    }
}
