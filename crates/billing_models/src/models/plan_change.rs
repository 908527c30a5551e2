//! Request body for scheduling a subscription plan change.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value as JsonValue};

use super::adjustment::NewAdjustment;
use super::discount::Discount;
use super::price::NewPlanPrice;
use crate::{open_enum, record, OpenEnum};

open_enum! {
    /// When the plan change takes effect.
    pub enum ChangeOption {
        RequestedDate => "requested_date",
        EndOfSubscriptionTerm => "end_of_subscription_term",
        Immediate => "immediate",
    }
}

open_enum! {
    pub enum BillingCycleAlignment {
        Unchanged => "unchanged",
        PlanChangeDate => "plan_change_date",
        StartOfMonth => "start_of_month",
    }
}

record! {
    pub struct AddAdjustment {
        required {
            adjustment: NewAdjustment,
        }
        optional {
            end_date: DateTime<Utc>,
            plan_phase_order: i64,
            start_date: DateTime<Utc>,
        }
    }
}

record! {
    pub struct RemoveAdjustment {
        required {
            adjustment_id: String,
        }
        optional {}
    }
}

record! {
    /// Swaps an existing plan price for a new one.
    pub struct ReplacePrice {
        required {
            replaces_price_id: String,
        }
        optional {
            discounts: Vec<Discount>,
            external_price_id: String,
            fixed_price_quantity: f64,
            maximum_amount: String,
            minimum_amount: String,
            price: NewPlanPrice,
            /// Existing price to use instead of `price`.
            price_id: String,
        }
    }
}

record! {
    pub struct SubscriptionSchedulePlanChangeParams {
        required {
            change_option: OpenEnum<ChangeOption>,
        }
        optional {
            add_adjustments: Vec<AddAdjustment>,
            align_billing_with_plan_change_date: bool,
            auto_collection: bool,
            billing_cycle_alignment: OpenEnum<BillingCycleAlignment>,
            /// Only meaningful with `ChangeOption::RequestedDate`.
            change_date: DateTime<Utc>,
            coupon_redemption_code: String,
            credits_overage_rate: f64,
            default_invoice_memo: String,
            external_plan_id: String,
            initial_phase_order: i64,
            invoicing_threshold: String,
            metadata: Map<String, JsonValue>,
            net_terms: i64,
            per_credit_overage_amount: f64,
            plan_id: String,
            plan_version_number: i64,
            remove_adjustments: Vec<RemoveAdjustment>,
            replace_prices: Vec<ReplacePrice>,
            trial_duration_days: i64,
        }
    }
}
