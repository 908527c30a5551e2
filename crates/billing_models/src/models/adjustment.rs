//! Adjustments applied to a subscription: discounts, minimums and maximums.

use crate::{open_enum, record, tagged_union};

open_enum! {
    pub enum PercentageDiscountAdjustmentType {
        PercentageDiscount => "percentage_discount",
    }
}

open_enum! {
    pub enum UsageDiscountAdjustmentType {
        UsageDiscount => "usage_discount",
    }
}

open_enum! {
    pub enum AmountDiscountAdjustmentType {
        AmountDiscount => "amount_discount",
    }
}

open_enum! {
    pub enum MinimumAdjustmentType {
        Minimum => "minimum",
    }
}

open_enum! {
    pub enum MaximumAdjustmentType {
        Maximum => "maximum",
    }
}

record! {
    pub struct NewPercentageDiscount {
        tag adjustment_type: PercentageDiscountAdjustmentType = PercentageDiscount;
        required {
            percentage_discount: f64,
        }
        optional {
            applies_to_all: bool,
            applies_to_item_ids: Vec<String>,
            applies_to_price_ids: Vec<String>,
            currency: String,
            /// Applied to the invoice total instead of individual line items.
            is_invoice_level: bool,
        }
    }
}

record! {
    pub struct NewUsageDiscount {
        tag adjustment_type: UsageDiscountAdjustmentType = UsageDiscount;
        required {
            usage_discount: f64,
        }
        optional {
            applies_to_all: bool,
            applies_to_item_ids: Vec<String>,
            applies_to_price_ids: Vec<String>,
            currency: String,
            is_invoice_level: bool,
        }
    }
}

record! {
    pub struct NewAmountDiscount {
        tag adjustment_type: AmountDiscountAdjustmentType = AmountDiscount;
        required {
            amount_discount: String,
        }
        optional {
            applies_to_all: bool,
            applies_to_item_ids: Vec<String>,
            applies_to_price_ids: Vec<String>,
            currency: String,
            is_invoice_level: bool,
        }
    }
}

record! {
    pub struct NewMinimum {
        tag adjustment_type: MinimumAdjustmentType = Minimum;
        required {
            /// Item the shortfall is billed against.
            item_id: String,
            minimum_amount: String,
        }
        optional {
            applies_to_all: bool,
            applies_to_item_ids: Vec<String>,
            applies_to_price_ids: Vec<String>,
            currency: String,
            is_invoice_level: bool,
        }
    }
}

record! {
    pub struct NewMaximum {
        tag adjustment_type: MaximumAdjustmentType = Maximum;
        required {
            maximum_amount: String,
        }
        optional {
            applies_to_all: bool,
            applies_to_item_ids: Vec<String>,
            applies_to_price_ids: Vec<String>,
            currency: String,
            is_invoice_level: bool,
        }
    }
}

tagged_union! {
    pub enum NewAdjustment tag = "adjustment_type" {
        PercentageDiscount("percentage_discount") => NewPercentageDiscount,
        UsageDiscount("usage_discount") => NewUsageDiscount,
        AmountDiscount("amount_discount") => NewAmountDiscount,
        Minimum("minimum") => NewMinimum,
        Maximum("maximum") => NewMaximum,
    }
}
