use crate::{open_enum, record, tagged_union};

open_enum! {
    pub enum PercentageDiscountType {
        Percentage => "percentage",
    }
}

open_enum! {
    pub enum TrialDiscountType {
        Trial => "trial",
    }
}

open_enum! {
    pub enum UsageDiscountType {
        Usage => "usage",
    }
}

open_enum! {
    pub enum AmountDiscountType {
        Amount => "amount",
    }
}

record! {
    pub struct PercentageDiscount {
        tag discount_type: PercentageDiscountType = Percentage;
        required {
            /// Fraction between 0 and 1.
            percentage_discount: f64,
        }
        optional {
            applies_to_price_ids: Vec<String>,
            reason: String,
        }
    }
}

record! {
    /// Free or discounted usage during a trial period.
    pub struct TrialDiscount {
        tag discount_type: TrialDiscountType = Trial;
        required {}
        optional {
            applies_to_price_ids: Vec<String>,
            reason: String,
            trial_amount_discount: String,
            trial_percentage_discount: f64,
        }
    }
}

record! {
    pub struct UsageDiscount {
        tag discount_type: UsageDiscountType = Usage;
        required {
            /// Number of usage units waived.
            usage_discount: f64,
        }
        optional {
            applies_to_price_ids: Vec<String>,
            reason: String,
        }
    }
}

record! {
    pub struct AmountDiscount {
        tag discount_type: AmountDiscountType = Amount;
        required {
            amount_discount: String,
        }
        optional {
            applies_to_price_ids: Vec<String>,
            reason: String,
        }
    }
}

tagged_union! {
    pub enum Discount tag = "discount_type" {
        Percentage("percentage") => PercentageDiscount,
        Trial("trial") => TrialDiscount,
        Usage("usage") => UsageDiscount,
        Amount("amount") => AmountDiscount,
    }
}

impl Discount {
    pub fn applies_to_price_ids(&self) -> &[String] {
        let ids = match self {
            Discount::Percentage(discount) => discount.applies_to_price_ids(),
            Discount::Trial(discount) => discount.applies_to_price_ids(),
            Discount::Usage(discount) => discount.applies_to_price_ids(),
            Discount::Amount(discount) => discount.applies_to_price_ids(),
            Discount::Unknown(_) => None,
        };
        ids.map(Vec::as_slice).unwrap_or(&[])
    }
}
