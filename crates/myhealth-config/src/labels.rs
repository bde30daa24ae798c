//! Localized label tables.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use myhealth_core::{LabelKey, LabelLookup};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

// =============================================================================
// LOCALE
// =============================================================================

/// Built-in label locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Russian.
    #[default]
    Ru,
    /// English.
    En,
}

impl Locale {
    /// Returns the locale code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            _ => Err(ConfigError::UnknownLocale(s.to_string())),
        }
    }
}

// =============================================================================
// LABEL TABLE
// =============================================================================

/// Maps every [`LabelKey`] to display text.
///
/// Keys without an entry render as their identifier, so a partial table
/// still produces readable output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    locale: Locale,
    labels: BTreeMap<LabelKey, String>,
}

/// On-disk shape of a label override file.
#[derive(Debug, Deserialize)]
struct LabelFile {
    base: Option<Locale>,
    #[serde(default)]
    labels: BTreeMap<String, String>,
}

impl LabelTable {
    /// Built-in table for `locale`.
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ru => Self::russian(),
            Locale::En => Self::english(),
        }
    }

    /// Russian labels.
    pub fn russian() -> Self {
        Self::from_pairs(
            Locale::Ru,
            &[
                (LabelKey::BondCalcTitle, "Расчет доходности облигаций"),
                (LabelKey::BondNominal, "Номинал, руб."),
                (LabelKey::BondPrice, "Текущая цена, руб."),
                (LabelKey::BondMaturityDate, "Дата погашения облигации"),
                (LabelKey::BondNcd, "НКД, руб."),
                (LabelKey::BondCouponAmount, "КД, руб."),
                (LabelKey::BondCouponCount, "Количество выплат КД"),
                (LabelKey::BondInvestableSum, "Сумма приобретения, руб."),
                (LabelKey::BondTotalBoughtCount, "Количество купленных облигаций"),
                (LabelKey::BondTotalBoughtSum, "Сумма купленных облигаций, руб."),
                (LabelKey::BondDaysToMaturity, "Дней до погашения"),
                (LabelKey::BondYtm, "Доходность к погашению, %г."),
                (LabelKey::BondTotalSum, "Итоговая сумма, руб."),
                (LabelKey::BondDiffSum, "Разница, руб."),
                (LabelKey::CalorieCalcTitle, "Расчет лимита ккал."),
                (LabelKey::BiometricGender, "Пол"),
                (LabelKey::BiometricWeight, "Вес, кг."),
                (LabelKey::BiometricHeight, "Рост, см."),
                (LabelKey::BiometricAge, "Возраст, лет"),
                (LabelKey::CalorieBmr, "Уровень базального метаболизма, ккал."),
                (LabelKey::CalorieSedentary, "Сидячая активность"),
                (LabelKey::CalorieLight, "Легкая активность"),
                (LabelKey::CalorieModerate, "Средняя активность"),
                (LabelKey::CalorieActive, "Полноценная активность"),
                (LabelKey::CalorieSuperActive, "Супер активность"),
                (LabelKey::ChatInvalidCommand, "Неправильная команда"),
                (LabelKey::ChatHelpTitle, "Команды помощи по разделам:"),
                (LabelKey::ChatHelpCalorie, "расчет калорий"),
                (LabelKey::ChatHelpBond, "расчет доходности облигаций"),
                (LabelKey::ChatActionCalc, "Расчет"),
                (LabelKey::ChatTypePositive, "Дробное>0"),
                (LabelKey::ChatTypeNonNegative, "Дробное>=0"),
                (LabelKey::ChatTypePositiveInteger, "Целое>0"),
                (LabelKey::ChatTypeCount, "Целое>=0"),
                (LabelKey::ChatTypeDate, "Дата DD.MM.YYYY"),
            ],
        )
    }

    /// English labels.
    pub fn english() -> Self {
        Self::from_pairs(
            Locale::En,
            &[
                (LabelKey::BondCalcTitle, "Bond yield calculator"),
                (LabelKey::BondNominal, "Nominal"),
                (LabelKey::BondPrice, "Current price"),
                (LabelKey::BondMaturityDate, "Maturity date"),
                (LabelKey::BondNcd, "Accrued coupon (NCD)"),
                (LabelKey::BondCouponAmount, "Coupon payment (CD)"),
                (LabelKey::BondCouponCount, "Coupon payments left"),
                (LabelKey::BondInvestableSum, "Investable sum"),
                (LabelKey::BondTotalBoughtCount, "Bonds bought"),
                (LabelKey::BondTotalBoughtSum, "Purchase cost"),
                (LabelKey::BondDaysToMaturity, "Days to maturity"),
                (LabelKey::BondYtm, "Yield to maturity, % p.a."),
                (LabelKey::BondTotalSum, "Total at maturity"),
                (LabelKey::BondDiffSum, "Profit/loss"),
                (LabelKey::CalorieCalcTitle, "Daily calorie need"),
                (LabelKey::BiometricGender, "Gender"),
                (LabelKey::BiometricWeight, "Weight, kg"),
                (LabelKey::BiometricHeight, "Height, cm"),
                (LabelKey::BiometricAge, "Age, years"),
                (LabelKey::CalorieBmr, "Basal metabolic rate, kcal"),
                (LabelKey::CalorieSedentary, "Sedentary"),
                (LabelKey::CalorieLight, "Lightly active"),
                (LabelKey::CalorieModerate, "Moderately active"),
                (LabelKey::CalorieActive, "Very active"),
                (LabelKey::CalorieSuperActive, "Super active"),
                (LabelKey::ChatInvalidCommand, "Invalid command"),
                (LabelKey::ChatHelpTitle, "Help by section:"),
                (LabelKey::ChatHelpCalorie, "calorie calculation"),
                (LabelKey::ChatHelpBond, "bond yield calculation"),
                (LabelKey::ChatActionCalc, "Calculate"),
                (LabelKey::ChatTypePositive, "Decimal>0"),
                (LabelKey::ChatTypeNonNegative, "Decimal>=0"),
                (LabelKey::ChatTypePositiveInteger, "Integer>0"),
                (LabelKey::ChatTypeCount, "Integer>=0"),
                (LabelKey::ChatTypeDate, "Date DD.MM.YYYY"),
            ],
        )
    }

    fn from_pairs(locale: Locale, pairs: &[(LabelKey, &str)]) -> Self {
        Self {
            locale,
            labels: pairs
                .iter()
                .map(|(key, text)| (*key, (*text).to_string()))
                .collect(),
        }
    }

    /// Parses a label file: an optional `base` locale plus a `[labels]` table
    /// of overrides keyed by label identifier.
    ///
    /// Without `base` the Russian table is used underneath.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::from_toml_str_with_base(content, Locale::default())
    }

    /// Like [`LabelTable::from_toml_str`] with an explicit fallback base.
    pub fn from_toml_str_with_base(content: &str, fallback: Locale) -> ConfigResult<Self> {
        let file: LabelFile = toml::from_str(content)?;
        let base = Self::for_locale(file.base.unwrap_or(fallback));
        base.with_overrides(file.labels)
    }

    /// Loads a label file from disk.
    pub fn from_file(path: impl AsRef<Path>, fallback: Locale) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        log::debug!("loading label overrides from {}", path.display());
        Self::from_toml_str_with_base(&content, fallback)
    }

    /// Applies overrides keyed by label identifier.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownLabel` for an identifier that names no key.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (id, text) in overrides {
            let key = LabelKey::parse(id.as_ref())?;
            self.labels.insert(key, text.into());
        }
        Ok(self)
    }

    /// Sets one label.
    pub fn set(&mut self, key: LabelKey, text: impl Into<String>) {
        self.labels.insert(key, text.into());
    }

    /// Base locale of this table.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Display text for `key`, or its identifier when missing.
    pub fn get(&self, key: LabelKey) -> &str {
        self.labels
            .get(&key)
            .map_or_else(|| key.as_str(), String::as_str)
    }

    /// All labels in display order.
    pub fn iter(&self) -> impl Iterator<Item = (LabelKey, &str)> + '_ {
        LabelKey::all().iter().map(move |&key| (key, self.get(key)))
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

impl LabelLookup for LabelTable {
    fn label(&self, key: LabelKey) -> &str {
        self.get(key)
    }
}

impl Validate for LabelTable {
    fn validate(&self) -> Vec<ValidationError> {
        LabelKey::all()
            .iter()
            .filter_map(|key| match self.labels.get(key) {
                None => Some(ValidationError::new(key.as_str(), "missing label")),
                Some(text) if text.trim().is_empty() => {
                    Some(ValidationError::new(key.as_str(), "label is blank"))
                }
                Some(_) => None,
            })
            .collect()
    }
}
