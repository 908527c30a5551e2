pub mod adjustment;
pub mod discount;
pub mod plan_change;
pub mod price;

pub use adjustment::{
    NewAdjustment, NewAmountDiscount, NewMaximum, NewMinimum, NewPercentageDiscount,
    NewUsageDiscount,
};
pub use discount::{AmountDiscount, Discount, PercentageDiscount, TrialDiscount, UsageDiscount};
pub use plan_change::{
    AddAdjustment, BillingCycleAlignment, ChangeOption, RemoveAdjustment, ReplacePrice,
    SubscriptionSchedulePlanChangeParams,
};
pub use price::{
    BillingCycleConfiguration, BulkConfig, BulkTier, Cadence, DurationUnit, NewPlanBulkPrice,
    NewPlanPackagePrice, NewPlanPrice, NewPlanTieredPrice, NewPlanUnitPrice, PackageConfig, Tier,
    TieredConfig, UnitConfig,
};
