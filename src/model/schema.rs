//! Resource type schemas.
//!
//! A schema is the static description of one Recurly v2 resource type: its
//! name, collection path, identity field, declared properties, and whether
//! the type supports listing. Declared properties behave like normal
//! fields; anything else discovered during inflation still lands in the
//! generic property bag.

/// Static description of a Recurly v2 resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    /// Singular type name (e.g. `"account"`).
    pub name: &'static str,
    /// Collection path under the API root (e.g. `"/accounts"`).
    pub collection_path: &'static str,
    /// Name of the property that serves as this type's identity.
    pub id_field: &'static str,
    /// Declared property names, in wire order.
    pub properties: &'static [&'static str],
    /// Whether the type has a listing endpoint.
    pub enumerable: bool,
}

impl ResourceSchema {
    /// Returns `true` if `field` is this schema's identity field.
    #[must_use]
    pub fn is_id_field(&self, field: &str) -> bool {
        self.id_field == field
    }
}

/// Account resource schema.
pub const ACCOUNT: ResourceSchema = ResourceSchema {
    name: "account",
    collection_path: "/accounts",
    id_field: "account_code",
    properties: &[
        "account_code",
        "state",
        "username",
        "email",
        "first_name",
        "last_name",
        "company_name",
        "vat_number",
        "address",
        "accept_language",
        "hosted_login_token",
        "created_at",
    ],
    enumerable: true,
};

/// Plan resource schema.
pub const PLAN: ResourceSchema = ResourceSchema {
    name: "plan",
    collection_path: "/plans",
    id_field: "plan_code",
    properties: &[
        "plan_code",
        "name",
        "description",
        "success_url",
        "cancel_url",
        "display_quantity",
        "unit_amount_in_cents",
        "setup_fee_in_cents",
        "plan_interval_length",
        "plan_interval_unit",
        "trial_interval_length",
        "trial_interval_unit",
        "tax_exempt",
        "created_at",
    ],
    enumerable: true,
};

/// Subscription resource schema.
pub const SUBSCRIPTION: ResourceSchema = ResourceSchema {
    name: "subscription",
    collection_path: "/subscriptions",
    id_field: "uuid",
    properties: &[
        "uuid",
        "state",
        "unit_amount_in_cents",
        "currency",
        "quantity",
        "activated_at",
        "canceled_at",
        "expires_at",
        "current_period_started_at",
        "current_period_ends_at",
        "trial_started_at",
        "trial_ends_at",
        "plan",
        "subscription_add_ons",
    ],
    enumerable: true,
};

/// Invoice resource schema.
pub const INVOICE: ResourceSchema = ResourceSchema {
    name: "invoice",
    collection_path: "/invoices",
    id_field: "invoice_number",
    properties: &[
        "invoice_number",
        "uuid",
        "state",
        "po_number",
        "vat_number",
        "subtotal_in_cents",
        "tax_in_cents",
        "total_in_cents",
        "currency",
        "created_at",
        "line_items",
        "transactions",
    ],
    enumerable: true,
};

/// Transaction resource schema.
pub const TRANSACTION: ResourceSchema = ResourceSchema {
    name: "transaction",
    collection_path: "/transactions",
    id_field: "uuid",
    properties: &[
        "uuid",
        "action",
        "amount_in_cents",
        "tax_in_cents",
        "currency",
        "status",
        "payment_method",
        "reference",
        "source",
        "recurring",
        "test",
        "voidable",
        "refundable",
        "created_at",
        "details",
    ],
    enumerable: true,
};

/// Coupon resource schema.
pub const COUPON: ResourceSchema = ResourceSchema {
    name: "coupon",
    collection_path: "/coupons",
    id_field: "coupon_code",
    properties: &[
        "coupon_code",
        "name",
        "state",
        "discount_type",
        "discount_percent",
        "discount_in_cents",
        "redeem_by_date",
        "single_use",
        "applies_for_months",
        "max_redemptions",
        "applies_to_all_plans",
        "created_at",
    ],
    enumerable: true,
};

/// Billing info resource schema.
///
/// Billing info hangs off an account; it has no listing endpoint of its own.
pub const BILLING_INFO: ResourceSchema = ResourceSchema {
    name: "billing_info",
    collection_path: "/billing_info",
    id_field: "account_code",
    properties: &[
        "account_code",
        "first_name",
        "last_name",
        "company",
        "address1",
        "address2",
        "city",
        "state",
        "zip",
        "country",
        "phone",
        "vat_number",
        "ip_address",
        "card_type",
        "first_six",
        "last_four",
        "month",
        "year",
    ],
    enumerable: false,
};

/// All built-in schemas, in registry order.
pub const BUILTIN: &[&ResourceSchema] = &[
    &ACCOUNT,
    &PLAN,
    &SUBSCRIPTION,
    &INVOICE,
    &TRANSACTION,
    &COUPON,
    &BILLING_INFO,
];

/// Looks up a built-in schema by its singular type name.
#[must_use]
pub fn builtin(name: &str) -> Option<&'static ResourceSchema> {
    BUILTIN.iter().copied().find(|schema| schema.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup_by_name() {
        assert_eq!(builtin("account"), Some(&ACCOUNT));
        assert_eq!(builtin("coupon"), Some(&COUPON));
        assert_eq!(builtin("no_such_type"), None);
    }

    #[test]
    fn test_id_fields_are_declared_properties() {
        for schema in BUILTIN {
            assert!(
                schema.properties.contains(&schema.id_field),
                "{} id field {} missing from declared properties",
                schema.name,
                schema.id_field
            );
        }
    }

    #[test]
    fn test_collection_paths_are_rooted() {
        for schema in BUILTIN {
            assert!(
                schema.collection_path.starts_with('/'),
                "{} collection path must start with /",
                schema.name
            );
        }
    }

    #[test]
    fn test_billing_info_is_not_enumerable() {
        assert!(!BILLING_INFO.enumerable);
        assert!(ACCOUNT.enumerable);
    }

    #[test]
    fn test_is_id_field() {
        assert!(ACCOUNT.is_id_field("account_code"));
        assert!(!ACCOUNT.is_id_field("email"));
    }
}
