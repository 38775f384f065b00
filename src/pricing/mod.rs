//! # Pricing
//!
//! Production [`AmountCalculator`] implementations.
//!
//! | Policy | Amount |
//! |--------|--------|
//! | `list_price` | `price * quantity` |
//! | `discount` | list price, minus the best volume tier, minus the preferred-customer rate |
//!
//! The policy is picked by [`PricingConfig`], so the workflow always sees one
//! three-argument calculator.

pub mod error;

pub use error::PricingError;

use crate::model::{Customer, Product};
use crate::service::AmountCalculator;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A volume discount applied from `min_quantity` units upwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    pub min_quantity: u32,
    pub percent_off: u8,
}

/// Selects and parameterises the calculator built by [`PriceCalculator::from_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PricingConfig {
    #[default]
    ListPrice,
    Discount {
        #[serde(default)]
        tiers: Vec<DiscountTier>,
        #[serde(default)]
        preferred_customers: Vec<String>,
        #[serde(default)]
        preferred_percent_off: u8,
    },
}

fn list_amount(product: &Product, quantity: u32) -> Result<u64, PricingError> {
    product
        .price
        .checked_mul(u64::from(quantity))
        .ok_or(PricingError::Overflow {
            price: product.price,
            quantity,
        })
}

fn validate_percent(percent: u8) -> Result<u8, PricingError> {
    if percent > 100 {
        return Err(PricingError::InvalidDiscount(percent));
    }
    Ok(percent)
}

/// Charges the list price. The customer is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListPriceCalculator;

#[async_trait]
impl AmountCalculator for ListPriceCalculator {
    async fn calculate_amount(
        &self,
        _customer: &Customer,
        product: &Product,
        quantity: u32,
    ) -> Result<u64, PricingError> {
        list_amount(product, quantity)
    }
}

/// Charges the list price less volume and preferred-customer discounts.
///
/// Only the best matching tier applies. The two rates combine multiplicatively and
/// the result is rounded down to a whole minor unit.
#[derive(Debug, Clone)]
pub struct DiscountCalculator {
    tiers: Vec<DiscountTier>,
    preferred_customers: Vec<String>,
    preferred_percent_off: u8,
}

impl DiscountCalculator {
    /// # Errors
    /// [`PricingError::InvalidDiscount`] if any rate is above 100 percent.
    pub fn new(
        tiers: Vec<DiscountTier>,
        preferred_customers: Vec<String>,
        preferred_percent_off: u8,
    ) -> Result<Self, PricingError> {
        for tier in &tiers {
            validate_percent(tier.percent_off)?;
        }
        validate_percent(preferred_percent_off)?;
        Ok(Self {
            tiers,
            preferred_customers,
            preferred_percent_off,
        })
    }

    fn volume_percent(&self, quantity: u32) -> u8 {
        self.tiers
            .iter()
            .filter(|tier| quantity >= tier.min_quantity)
            .map(|tier| tier.percent_off)
            .max()
            .unwrap_or(0)
    }

    fn preferred_percent(&self, customer: &Customer) -> u8 {
        if self.preferred_customers.contains(&customer.name) {
            self.preferred_percent_off
        } else {
            0
        }
    }
}

#[async_trait]
impl AmountCalculator for DiscountCalculator {
    async fn calculate_amount(
        &self,
        customer: &Customer,
        product: &Product,
        quantity: u32,
    ) -> Result<u64, PricingError> {
        let list = list_amount(product, quantity)?;
        let volume = self.volume_percent(quantity);
        let preferred = self.preferred_percent(customer);

        // Both rates are at most 100, so the result never exceeds `list`.
        let kept = u128::from(100 - volume) * u128::from(100 - preferred);
        let amount = (u128::from(list) * kept / 10_000) as u64;

        debug!(list, volume, preferred, amount, "Discount applied");
        Ok(amount)
    }
}

/// The calculator selected by configuration.
#[derive(Debug, Clone)]
pub enum PriceCalculator {
    ListPrice(ListPriceCalculator),
    Discount(DiscountCalculator),
}

impl PriceCalculator {
    pub fn from_config(config: &PricingConfig) -> Result<Self, PricingError> {
        match config {
            PricingConfig::ListPrice => Ok(Self::ListPrice(ListPriceCalculator)),
            PricingConfig::Discount {
                tiers,
                preferred_customers,
                preferred_percent_off,
            } => DiscountCalculator::new(
                tiers.clone(),
                preferred_customers.clone(),
                *preferred_percent_off,
            )
            .map(Self::Discount),
        }
    }
}

#[async_trait]
impl AmountCalculator for PriceCalculator {
    async fn calculate_amount(
        &self,
        customer: &Customer,
        product: &Product,
        quantity: u32,
    ) -> Result<u64, PricingError> {
        match self {
            Self::ListPrice(calculator) => {
                calculator.calculate_amount(customer, product, quantity).await
            }
            Self::Discount(calculator) => {
                calculator.calculate_amount(customer, product, quantity).await
            }
        }
    }
}
