//! Price calculations for skips and optional extras.
//!
//! All prices are in whole pounds. VAT-inclusive totals are rounded with
//! [`f64::round`], i.e. halves round away from zero.

use crate::model::SkipOption;

/// VAT-inclusive price, rounded to whole pounds.
///
/// Inputs are not validated; negative prices or rates pass straight through
/// the formula.
pub fn total_price(price_before_vat: f64, vat_percent: f64) -> i64 {
    (price_before_vat * (1.0 + vat_percent / 100.0)).round() as i64
}

/// Optional add-ons offered alongside a skip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extra {
    RoadPermit,
    SameDayDelivery,
    ExtendedHire,
}

impl Extra {
    pub const ALL: [Extra; 3] = [
        Extra::RoadPermit,
        Extra::SameDayDelivery,
        Extra::ExtendedHire,
    ];

    /// Surcharge in whole pounds
    pub fn price(&self) -> i64 {
        match self {
            Extra::RoadPermit => 45,
            Extra::SameDayDelivery => 25,
            Extra::ExtendedHire => 35,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Extra::RoadPermit => "Road permit required",
            Extra::SameDayDelivery => "Same day delivery",
            Extra::ExtendedHire => "Extended hire (7 extra days)",
        }
    }

    /// A road permit only makes sense for skips that may sit on the road.
    pub fn is_offered_for(&self, skip: &SkipOption) -> bool {
        match self {
            Extra::RoadPermit => skip.allowed_on_road,
            Extra::SameDayDelivery | Extra::ExtendedHire => true,
        }
    }

    /// Extras that can be chosen for `skip`, in display order
    pub fn offered_for(skip: &SkipOption) -> Vec<Extra> {
        Self::ALL
            .into_iter()
            .filter(|extra| extra.is_offered_for(skip))
            .collect()
    }
}

/// The set of extras toggled for the current selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extras {
    road_permit: bool,
    same_day_delivery: bool,
    extended_hire: bool,
}

impl Extras {
    pub fn contains(&self, extra: Extra) -> bool {
        match extra {
            Extra::RoadPermit => self.road_permit,
            Extra::SameDayDelivery => self.same_day_delivery,
            Extra::ExtendedHire => self.extended_hire,
        }
    }

    pub fn toggle(&mut self, extra: Extra) {
        let flag = match extra {
            Extra::RoadPermit => &mut self.road_permit,
            Extra::SameDayDelivery => &mut self.same_day_delivery,
            Extra::ExtendedHire => &mut self.extended_hire,
        };
        *flag = !*flag;
    }

    pub fn is_empty(&self) -> bool {
        !self.road_permit && !self.same_day_delivery && !self.extended_hire
    }

    /// Extras that are toggled on and offered for `skip`
    pub fn applicable(&self, skip: &SkipOption) -> impl Iterator<Item = Extra> + '_ {
        let skip_allows_road = skip.allowed_on_road;
        Extra::ALL.into_iter().filter(move |extra| {
            self.contains(*extra) && (*extra != Extra::RoadPermit || skip_allows_road)
        })
    }

    /// Sum of surcharges for the extras that apply to `skip`
    pub fn total_for(&self, skip: &SkipOption) -> i64 {
        self.applicable(skip).map(|extra| extra.price()).sum()
    }
}

/// VAT-inclusive skip price plus every applicable extra
pub fn grand_total(skip: &SkipOption, extras: &Extras) -> i64 {
    skip.total_price() + extras.total_for(skip)
}
