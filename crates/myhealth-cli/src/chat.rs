//! Chat-style command processor.
//!
//! Commands are comma separated, the way they are typed into a messenger:
//!
//! ```text
//! h
//! c,h
//! c,c,<m|f>,<weight>,<height>,<age>
//! bond,h
//! bond,c,<nominal>,<price>,<DD.MM.YYYY>,<ncd>,<cd>,<cd count>,<sum>
//! ```
//!
//! Every reply string, including the invalid-command message, comes from the
//! label table.

use myhealth_calc::{
    BiometricInputs, BondInputs, BondYieldCalculator, CalcError, CalorieNeedCalculator, ResultRow,
};
use myhealth_core::{Date, Gender, LabelKey, LabelLookup};
use thiserror::Error;

use crate::commands::{parse_date, parse_decimal};

/// Chat command failure.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Unknown command, malformed arguments or rejected inputs.
    #[error("{message}")]
    InvalidCommand {
        /// Localized reply text.
        message: String,
    },

    /// Inputs were accepted but the calculation could not be carried out.
    #[error("{0}")]
    Calculation(CalcError),
}

/// Interprets chat commands against a label table.
pub struct ChatProcessor<'a> {
    labels: &'a dyn LabelLookup,
    today: Date,
}

impl<'a> ChatProcessor<'a> {
    /// Creates a processor evaluating bond commands at `today`.
    pub fn new(labels: &'a dyn LabelLookup, today: Date) -> Self {
        Self { labels, today }
    }

    /// Processes one command line and returns the reply text.
    pub fn process(&self, line: &str) -> Result<String, ChatError> {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        let Some((base, rest)) = parts.split_first() else {
            return Err(self.invalid(&parts));
        };

        match command_word(base).as_str() {
            "h" if rest.is_empty() => Ok(self.help()),
            "c" => self.process_calc_cal(rest),
            "bond" => self.process_bond(rest),
            _ => Err(self.invalid(&parts)),
        }
    }

    fn process_calc_cal(&self, parts: &[&str]) -> Result<String, ChatError> {
        let Some((sub, args)) = parts.split_first() else {
            return Err(self.invalid(parts));
        };

        match (command_word(sub).as_str(), args) {
            ("c", args) => self.calc_cal(args),
            ("h", []) => Ok(self.calc_cal_help()),
            _ => Err(self.invalid(parts)),
        }
    }

    fn calc_cal(&self, args: &[&str]) -> Result<String, ChatError> {
        let [gender, weight, height, age] = args else {
            return Err(self.invalid(args));
        };

        let gender: Gender = gender.parse().map_err(|_| self.invalid(args))?;
        let weight = parse_decimal(weight).map_err(|_| self.invalid(args))?;
        let height = parse_decimal(height).map_err(|_| self.invalid(args))?;
        let age: u32 = age.parse().map_err(|_| self.invalid(args))?;

        let inputs = BiometricInputs::new(gender, weight, height, age)
            .map_err(|err| self.rejected(err, args))?;
        let result = CalorieNeedCalculator::compute(&inputs);

        let body: String = result
            .rows()
            .iter()
            .map(|row| format!("\n{}\n{}\n", self.labels.label(row.label), row.formatted()))
            .collect();
        Ok(format!("{}\n{body}", self.labels.label(LabelKey::CalorieCalcTitle)))
    }

    fn calc_cal_help(&self) -> String {
        let gender = format!(
            "{} [{}|{}]",
            self.labels.label(LabelKey::BiometricGender),
            Gender::Male.code(),
            Gender::Female.code(),
        );
        self.help_block(
            LabelKey::CalorieCalcTitle,
            "c,c",
            &[
                gender,
                self.typed_arg(LabelKey::BiometricWeight, LabelKey::ChatTypePositive),
                self.typed_arg(LabelKey::BiometricHeight, LabelKey::ChatTypePositive),
                self.typed_arg(LabelKey::BiometricAge, LabelKey::ChatTypePositiveInteger),
            ],
        )
    }

    fn process_bond(&self, parts: &[&str]) -> Result<String, ChatError> {
        let Some((sub, args)) = parts.split_first() else {
            return Err(self.invalid(parts));
        };

        match (command_word(sub).as_str(), args) {
            ("c", args) => self.bond(args),
            ("h", []) => Ok(self.bond_help()),
            _ => Err(self.invalid(parts)),
        }
    }

    fn bond(&self, args: &[&str]) -> Result<String, ChatError> {
        let [nominal, price, maturity, ncd, cd, cd_count, sum] = args else {
            return Err(self.invalid(args));
        };

        let inputs = BondInputs {
            nominal: parse_decimal(nominal).map_err(|_| self.invalid(args))?,
            price: parse_decimal(price).map_err(|_| self.invalid(args))?,
            maturity_date: parse_date(maturity).map_err(|_| self.invalid(args))?,
            ncd: parse_decimal(ncd).map_err(|_| self.invalid(args))?,
            coupon_amount: parse_decimal(cd).map_err(|_| self.invalid(args))?,
            coupon_count: cd_count.parse().map_err(|_| self.invalid(args))?,
            investable_sum: parse_decimal(sum).map_err(|_| self.invalid(args))?,
        };

        let result = BondYieldCalculator::compute(&inputs, self.today)
            .map_err(|err| self.rejected(err, args))?;
        Ok(self.key_value_lines(LabelKey::BondCalcTitle, &result.rows()))
    }

    fn bond_help(&self) -> String {
        use LabelKey::{ChatTypeCount, ChatTypeDate, ChatTypeNonNegative, ChatTypePositive};

        self.help_block(
            LabelKey::BondCalcTitle,
            "bond,c",
            &[
                self.typed_arg(LabelKey::BondNominal, ChatTypePositive),
                self.typed_arg(LabelKey::BondPrice, ChatTypePositive),
                self.typed_arg(LabelKey::BondMaturityDate, ChatTypeDate),
                self.typed_arg(LabelKey::BondNcd, ChatTypeNonNegative),
                self.typed_arg(LabelKey::BondCouponAmount, ChatTypeNonNegative),
                self.typed_arg(LabelKey::BondCouponCount, ChatTypeCount),
                self.typed_arg(LabelKey::BondInvestableSum, ChatTypePositive),
            ],
        )
    }

    fn help(&self) -> String {
        format!(
            "{}\n\u{2022} c,h - {}\n\u{2022} bond,h - {}\n",
            self.labels.label(LabelKey::ChatHelpTitle),
            self.labels.label(LabelKey::ChatHelpCalorie),
            self.labels.label(LabelKey::ChatHelpBond),
        )
    }

    /// Title, action name, the command prefix, then one argument per line.
    fn help_block(&self, title: LabelKey, command: &str, args: &[String]) -> String {
        let arg_lines = args.join(",\n ");
        format!(
            "{}\n\u{2022} {}\n{command},\n {arg_lines}\n",
            self.labels.label(title),
            self.labels.label(LabelKey::ChatActionCalc),
        )
    }

    fn typed_arg(&self, name: LabelKey, kind: LabelKey) -> String {
        format!("{} [{}]", self.labels.label(name), self.labels.label(kind))
    }

    fn key_value_lines(&self, title: LabelKey, rows: &[ResultRow]) -> String {
        let body: String = rows
            .iter()
            .map(|row| format!("{}: {}\n", self.labels.label(row.label), row.formatted()))
            .collect();
        format!("{}\n\n{body}", self.labels.label(title))
    }

    fn invalid(&self, parts: &[&str]) -> ChatError {
        tracing::warn!(cmd_parts = ?parts, "invalid command");
        ChatError::InvalidCommand {
            message: self.labels.label(LabelKey::ChatInvalidCommand).to_string(),
        }
    }

    /// Input validation failures read as an invalid command; arithmetic
    /// failures keep their own message.
    fn rejected(&self, err: CalcError, parts: &[&str]) -> ChatError {
        if err.is_validation() {
            tracing::warn!(error = %err, "chat inputs rejected");
            self.invalid(parts)
        } else {
            ChatError::Calculation(err)
        }
    }
}

fn command_word(word: &str) -> String {
    word.to_lowercase()
}
