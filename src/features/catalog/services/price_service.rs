use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::catalog::dtos::{CreatePriceDto, PriceResponseDto, UpdatePriceDto};
use crate::features::catalog::models::Price;
use crate::features::catalog::repositories::PriceRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

pub struct PriceService {
    prices: Arc<dyn PriceRepository>,
}

impl PriceService {
    pub fn new(prices: Arc<dyn PriceRepository>) -> Self {
        Self { prices }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<PriceResponseDto>, Meta)> {
        let (prices, total) = self.prices.list(query).await?;
        let items = prices.into_iter().map(PriceResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<PriceResponseDto> {
        self.find(id).await.map(PriceResponseDto::from)
    }

    pub async fn create(
        &self,
        dto: CreatePriceDto,
        actor: &AuthenticatedUser,
    ) -> Result<PriceResponseDto> {
        validate_range(dto.min_amount, dto.max_amount)?;

        let label = dto.label.trim().to_string();
        self.check_label(&label, None).await?;
        self.check_order_number(dto.order_number, None).await?;

        let price = Price {
            id: Uuid::now_v7(),
            label,
            min_amount: dto.min_amount,
            max_amount: dto.max_amount,
            order_number: dto.order_number,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.prices.insert(&price).await?;
        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdatePriceDto,
        actor: &AuthenticatedUser,
    ) -> Result<PriceResponseDto> {
        let mut price = self.find(id).await?;

        let min_amount = dto.min_amount.unwrap_or(price.min_amount);
        let max_amount = dto.max_amount.unwrap_or(price.max_amount);
        validate_range(min_amount, max_amount)?;
        price.min_amount = min_amount;
        price.max_amount = max_amount;

        if let Some(label) = dto.label {
            let label = label.trim().to_string();
            if !label.eq_ignore_ascii_case(&price.label) {
                self.check_label(&label, Some(id)).await?;
            }
            price.label = label;
        }
        if let Some(order_number) = dto.order_number {
            if order_number != price.order_number {
                self.check_order_number(order_number, Some(id)).await?;
                price.order_number = order_number;
            }
        }
        if let Some(is_active) = dto.is_active {
            price.is_active = is_active;
        }

        price.audit.touch(actor.actor());
        let updated = self.prices.update(&price).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.prices.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Price> {
        self.prices.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    async fn check_label(&self, label: &str, exclude: Option<Uuid>) -> Result<()> {
        if self.prices.label_taken(label, exclude).await? {
            return Err(AppError::Conflict(format!(
                "Price label '{}' already exists",
                label
            )));
        }
        Ok(())
    }

    async fn check_order_number(&self, order_number: i32, exclude: Option<Uuid>) -> Result<()> {
        if self.prices.order_number_taken(order_number, exclude).await? {
            return Err(AppError::Conflict(format!(
                "Price order number {} is already in use",
                order_number
            )));
        }
        Ok(())
    }
}

/// Both bounds non-negative and `min <= max`
/// Largest value a `NUMERIC(12, 2)` column holds
const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

fn validate_range(min_amount: Decimal, max_amount: Decimal) -> Result<()> {
    if min_amount.is_sign_negative() || max_amount.is_sign_negative() {
        return Err(AppError::Validation(
            "Price amounts must not be negative".to_string(),
        ));
    }
    for amount in [min_amount, max_amount] {
        if amount > MAX_AMOUNT {
            return Err(AppError::Validation(format!(
                "Price amount {} exceeds the maximum of {}",
                amount, MAX_AMOUNT
            )));
        }
        if amount.normalize().scale() > 2 {
            return Err(AppError::Validation(format!(
                "Price amount {} has more than two decimal places",
                amount
            )));
        }
    }
    if min_amount > max_amount {
        return Err(AppError::Validation(format!(
            "Minimum amount {} must not exceed maximum amount {}",
            min_amount, max_amount
        )));
    }
    Ok(())
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Price with id {} not found", id))
}
