//! Display strings registered by the rule.

/// Common prefix of every display string the rule owns.
pub const RESOURCE_PREFIX: &str = "Plugins.DiscountRules.HasOneProduct.";

/// A named display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleResource {
    pub name: &'static str,
    pub value: &'static str,
}

/// Display strings installed with the rule.
pub const RESOURCES: &[LocaleResource] = &[
    LocaleResource {
        name: "Plugins.DiscountRules.HasOneProduct.Fields.Products",
        value: "Restricted products [and quantity range]",
    },
    LocaleResource {
        name: "Plugins.DiscountRules.HasOneProduct.Fields.Products.Hint",
        value: "The comma-separated list of product identifiers (e.g. 77, 123, 156). \
                You can find a product ID on its details page. You can also specify the \
                comma-separated list of product identifiers with quantities \
                ({Product ID}:{Quantity}. for example, 77:1, 123:2, 156:3). And you can \
                also specify the comma-separated list of product identifiers with quantity \
                range ({Product ID}:{Min quantity}-{Max quantity}. for example, 77:1-3, \
                123:2-5, 156:3-8).",
    },
    LocaleResource {
        name: "Plugins.DiscountRules.HasOneProduct.Fields.Products.AddNew",
        value: "Add product",
    },
    LocaleResource {
        name: "Plugins.DiscountRules.HasOneProduct.Fields.Products.Choose",
        value: "Choose",
    },
];
