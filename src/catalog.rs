//! Backend catalogs: the fixed code/label sets the record forms submit.

use crate::filter::SelectOption;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a sale was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalesType {
    Feed,
    Eggs,
    Drugs,
    Chicks,
}

impl SalesType {
    pub const ALL: [SalesType; 4] = [
        SalesType::Feed,
        SalesType::Eggs,
        SalesType::Drugs,
        SalesType::Chicks,
    ];

    /// Backend code submitted with sale records.
    pub fn code(self) -> u8 {
        match self {
            SalesType::Feed => 1,
            SalesType::Eggs => 2,
            SalesType::Drugs => 3,
            SalesType::Chicks => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            SalesType::Feed => "Feed",
            SalesType::Eggs => "Eggs",
            SalesType::Drugs => "Drugs",
            SalesType::Chicks => "Chicks",
        }
    }
}

impl fmt::Display for SalesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Feed brands stocked by the farm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedBrand {
    TopFeedStarter,
    TopFeedGrower,
    TopFeedFinisher,
    TopFeedLayer,
    NewHopeStarter,
    NewHopeGrower,
    NewHopeFinisher,
    NewHopeLayer,
    AdvarStarter,
    AdvarGrower,
    AdvarLayer,
    AdvarFinisher,
}

impl FeedBrand {
    pub const ALL: [FeedBrand; 12] = [
        FeedBrand::TopFeedStarter,
        FeedBrand::TopFeedGrower,
        FeedBrand::TopFeedFinisher,
        FeedBrand::TopFeedLayer,
        FeedBrand::NewHopeStarter,
        FeedBrand::NewHopeGrower,
        FeedBrand::NewHopeFinisher,
        FeedBrand::NewHopeLayer,
        FeedBrand::AdvarStarter,
        FeedBrand::AdvarGrower,
        FeedBrand::AdvarLayer,
        FeedBrand::AdvarFinisher,
    ];

    pub fn code(self) -> u8 {
        match self {
            FeedBrand::TopFeedStarter => 1,
            FeedBrand::TopFeedGrower => 2,
            FeedBrand::TopFeedFinisher => 3,
            FeedBrand::TopFeedLayer => 4,
            FeedBrand::NewHopeStarter => 5,
            FeedBrand::NewHopeGrower => 6,
            FeedBrand::NewHopeFinisher => 7,
            FeedBrand::NewHopeLayer => 8,
            FeedBrand::AdvarStarter => 9,
            FeedBrand::AdvarGrower => 10,
            FeedBrand::AdvarLayer => 11,
            FeedBrand::AdvarFinisher => 12,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedBrand::TopFeedStarter => "TopFeed Starter",
            FeedBrand::TopFeedGrower => "TopFeed Grower",
            FeedBrand::TopFeedFinisher => "TopFeed Finisher",
            FeedBrand::TopFeedLayer => "TopFeed Layer",
            FeedBrand::NewHopeStarter => "NewHope Starter",
            FeedBrand::NewHopeGrower => "NewHope Grower",
            FeedBrand::NewHopeFinisher => "NewHope Finisher",
            FeedBrand::NewHopeLayer => "NewHope Layer",
            FeedBrand::AdvarStarter => "Advar Starter",
            FeedBrand::AdvarGrower => "Advar Grower",
            FeedBrand::AdvarLayer => "Advar Layer",
            FeedBrand::AdvarFinisher => "Advar Finisher",
        }
    }

    /// Case-insensitive label match, for CLI filter flags.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|b| b.label().eq_ignore_ascii_case(label))
    }

    /// Dropdown options in catalog order, as record forms present them.
    pub fn select_options() -> Vec<SelectOption> {
        Self::ALL
            .into_iter()
            .map(|b| SelectOption {
                value: b.code().to_string(),
                label: b.label().to_string(),
            })
            .collect()
    }
}

impl fmt::Display for FeedBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Units feed is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedUnit {
    Bag,
    Paint,
    HalfPaint,
    Derica,
    HalfDerica,
    Cup,
}

impl FeedUnit {
    pub const ALL: [FeedUnit; 6] = [
        FeedUnit::Bag,
        FeedUnit::Paint,
        FeedUnit::HalfPaint,
        FeedUnit::Derica,
        FeedUnit::HalfDerica,
        FeedUnit::Cup,
    ];

    pub fn code(self) -> u8 {
        match self {
            FeedUnit::Bag => 1,
            FeedUnit::Paint => 2,
            FeedUnit::HalfPaint => 3,
            FeedUnit::Derica => 4,
            FeedUnit::HalfDerica => 5,
            FeedUnit::Cup => 6,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedUnit::Bag => "Bag",
            FeedUnit::Paint => "Paint",
            FeedUnit::HalfPaint => "Half Paint",
            FeedUnit::Derica => "Derica",
            FeedUnit::HalfDerica => "Half Derica",
            FeedUnit::Cup => "Cup",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|u| u.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for FeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for brand in FeedBrand::ALL {
            assert_eq!(FeedBrand::from_code(brand.code()), Some(brand));
        }
        for unit in FeedUnit::ALL {
            assert_eq!(FeedUnit::from_code(unit.code()), Some(unit));
        }
        for sales_type in SalesType::ALL {
            assert_eq!(SalesType::from_code(sales_type.code()), Some(sales_type));
        }
        assert_eq!(FeedBrand::from_code(0), None);
        assert_eq!(FeedUnit::from_code(99), None);
    }

    #[test]
    fn labels_resolve_case_insensitively() {
        assert_eq!(
            FeedBrand::from_label("topfeed layer"),
            Some(FeedBrand::TopFeedLayer)
        );
        assert_eq!(FeedUnit::from_label("half derica"), Some(FeedUnit::HalfDerica));
        assert_eq!(FeedBrand::from_label("Bespoke Mash"), None);
    }

    #[test]
    fn select_options_pair_codes_with_labels() {
        let options = FeedBrand::select_options();
        assert_eq!(options.len(), 12);
        assert_eq!(options[0].value, "1");
        assert_eq!(options[0].label, "TopFeed Starter");
    }
}
