//! Prices attached to a plan, one shape per pricing model.

use serde_json::{Map, Value as JsonValue};

use crate::{open_enum, record, tagged_union, OpenEnum};

open_enum! {
    /// How often a price is billed.
    pub enum Cadence {
        Annual => "annual",
        SemiAnnual => "semi_annual",
        Monthly => "monthly",
        Quarterly => "quarterly",
        OneTime => "one_time",
        Custom => "custom",
    }
}

open_enum! {
    pub enum DurationUnit {
        Day => "day",
        Month => "month",
    }
}

open_enum! {
    pub enum UnitModelType {
        Unit => "unit",
    }
}

open_enum! {
    pub enum PackageModelType {
        Package => "package",
    }
}

open_enum! {
    pub enum TieredModelType {
        Tiered => "tiered",
    }
}

open_enum! {
    pub enum BulkModelType {
        Bulk => "bulk",
    }
}

record! {
    pub struct UnitConfig {
        required {
            /// Rate per unit of usage, as a decimal string.
            unit_amount: String,
        }
        optional {}
    }
}

record! {
    pub struct PackageConfig {
        required {
            package_amount: String,
            /// Number of units a single package covers.
            package_size: i64,
        }
        optional {}
    }
}

record! {
    /// One band of a tiered price. `last_unit` is open-ended when unset.
    pub struct Tier {
        required {
            first_unit: f64,
            unit_amount: String,
        }
        optional {
            last_unit: f64,
        }
    }
}

record! {
    pub struct TieredConfig {
        required {
            tiers: Vec<Tier>,
        }
        optional {}
    }
}

record! {
    pub struct BulkTier {
        required {
            unit_amount: String,
        }
        optional {
            maximum_units: f64,
        }
    }
}

record! {
    /// Bulk pricing applies a single tier's rate to every unit.
    pub struct BulkConfig {
        required {
            tiers: Vec<BulkTier>,
        }
        optional {}
    }
}

record! {
    pub struct BillingCycleConfiguration {
        required {
            duration: i64,
            duration_unit: OpenEnum<DurationUnit>,
        }
        optional {}
    }
}

record! {
    /// Flat rate per unit.
    pub struct NewPlanUnitPrice {
        tag model_type: UnitModelType = Unit;
        required {
            cadence: OpenEnum<Cadence>,
            item_id: String,
            name: String,
            unit_config: UnitConfig,
        }
        optional {
            billable_metric_id: String,
            billed_in_advance: bool,
            billing_cycle_configuration: BillingCycleConfiguration,
            conversion_rate: f64,
            currency: String,
            external_price_id: String,
            fixed_price_quantity: f64,
            invoice_grouping_key: String,
            invoicing_cycle_configuration: BillingCycleConfiguration,
            metadata: Map<String, JsonValue>,
        }
    }
}

record! {
    pub struct NewPlanPackagePrice {
        tag model_type: PackageModelType = Package;
        required {
            cadence: OpenEnum<Cadence>,
            item_id: String,
            name: String,
            package_config: PackageConfig,
        }
        optional {
            billable_metric_id: String,
            billed_in_advance: bool,
            billing_cycle_configuration: BillingCycleConfiguration,
            conversion_rate: f64,
            currency: String,
            external_price_id: String,
            fixed_price_quantity: f64,
            invoice_grouping_key: String,
            invoicing_cycle_configuration: BillingCycleConfiguration,
            metadata: Map<String, JsonValue>,
        }
    }
}

record! {
    pub struct NewPlanTieredPrice {
        tag model_type: TieredModelType = Tiered;
        required {
            cadence: OpenEnum<Cadence>,
            item_id: String,
            name: String,
            tiered_config: TieredConfig,
        }
        optional {
            billable_metric_id: String,
            billed_in_advance: bool,
            billing_cycle_configuration: BillingCycleConfiguration,
            conversion_rate: f64,
            currency: String,
            external_price_id: String,
            fixed_price_quantity: f64,
            invoice_grouping_key: String,
            invoicing_cycle_configuration: BillingCycleConfiguration,
            metadata: Map<String, JsonValue>,
        }
    }
}

record! {
    pub struct NewPlanBulkPrice {
        tag model_type: BulkModelType = Bulk;
        required {
            bulk_config: BulkConfig,
            cadence: OpenEnum<Cadence>,
            item_id: String,
            name: String,
        }
        optional {
            billable_metric_id: String,
            billed_in_advance: bool,
            billing_cycle_configuration: BillingCycleConfiguration,
            conversion_rate: f64,
            currency: String,
            external_price_id: String,
            fixed_price_quantity: f64,
            invoice_grouping_key: String,
            invoicing_cycle_configuration: BillingCycleConfiguration,
            metadata: Map<String, JsonValue>,
        }
    }
}

tagged_union! {
    /// A new price for a plan, resolved by `model_type`.
    pub enum NewPlanPrice tag = "model_type" {
        Unit("unit") => NewPlanUnitPrice,
        Package("package") => NewPlanPackagePrice,
        Tiered("tiered") => NewPlanTieredPrice,
        Bulk("bulk") => NewPlanBulkPrice,
    }
}

impl NewPlanPrice {
    /// `None` for unknown shapes and for prices without a cadence.
    pub fn cadence(&self) -> Option<&OpenEnum<Cadence>> {
        match self {
            NewPlanPrice::Unit(price) => price.cadence(),
            NewPlanPrice::Package(price) => price.cadence(),
            NewPlanPrice::Tiered(price) => price.cadence(),
            NewPlanPrice::Bulk(price) => price.cadence(),
            NewPlanPrice::Unknown(_) => None,
        }
    }

    pub fn item_id(&self) -> Option<&str> {
        match self {
            NewPlanPrice::Unit(price) => price.item_id().map(String::as_str),
            NewPlanPrice::Package(price) => price.item_id().map(String::as_str),
            NewPlanPrice::Tiered(price) => price.item_id().map(String::as_str),
            NewPlanPrice::Bulk(price) => price.item_id().map(String::as_str),
            NewPlanPrice::Unknown(raw) => raw.get("item_id").and_then(JsonValue::as_str),
        }
    }
}
