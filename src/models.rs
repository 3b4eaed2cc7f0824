//! Row types for the six store tables.

use crate::entity::{Carrier, Entity, Gender, Tier};
use crate::schema::*;
use chrono::NaiveDate;
use diesel::prelude::*;

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = categories)]
pub struct Category {
    #[diesel(column_name = category_id)]
    pub id: i32,
    #[diesel(column_name = category_name)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = products)]
pub struct Product {
    #[diesel(column_name = product_id)]
    pub id: i32,
    #[diesel(column_name = product_name)]
    pub name: String,
    pub category_id: i32,
    pub price: f64,
    pub stock: i32,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = customers, treat_none_as_default_value = false)]
pub struct Customer {
    #[diesel(column_name = customer_id)]
    pub id: i32,
    #[diesel(column_name = customer_name)]
    pub name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    #[diesel(column_name = customer_tier)]
    pub tier: Tier,
    pub registration_date: NaiveDate,
    /// Zero until the aggregation pass rewrites it from the stored orders.
    pub total_spent: f64,
}

impl Customer {
    /// True when any of email, phone or address was nulled out.
    pub fn is_missing_contact(&self) -> bool {
        self.email.is_none() || self.phone_number.is_none() || self.address.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = orders, treat_none_as_default_value = false)]
pub struct Order {
    #[diesel(column_name = order_id)]
    pub id: i32,
    pub customer_id: i32,
    pub order_date: NaiveDate,
    pub order_total: f64,
    pub promo_code: Option<String>,
}

/// Line item, identified by `(order_id, item_no)`.
#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = order_items)]
pub struct OrderItem {
    pub order_id: i32,
    pub item_no: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub line_total: f64,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = shipments, treat_none_as_default_value = false)]
pub struct Shipment {
    #[diesel(column_name = shipment_id)]
    pub id: i32,
    pub order_id: i32,
    /// Absent when the order was never shipped.
    pub shipped_date: Option<NaiveDate>,
    /// Absent when the parcel never arrived; always absent without a shipped date.
    pub delivery_date: Option<NaiveDate>,
    pub carrier: Carrier,
    pub tracking_number: String,
}

impl Entity for Category {
    const NAME: &'static str = "Categories";
    const DEPENDS_ON: &'static [&'static str] = &[];
}

impl Entity for Product {
    const NAME: &'static str = "Products";
    const DEPENDS_ON: &'static [&'static str] = &["Categories"];
}

impl Entity for Customer {
    const NAME: &'static str = "Customers";
    const DEPENDS_ON: &'static [&'static str] = &[];
}

impl Entity for Order {
    const NAME: &'static str = "Orders";
    const DEPENDS_ON: &'static [&'static str] = &["Customers"];
}

impl Entity for OrderItem {
    const NAME: &'static str = "Order_Items";
    const DEPENDS_ON: &'static [&'static str] = &["Orders", "Products"];
}

impl Entity for Shipment {
    const NAME: &'static str = "Shipments";
    const DEPENDS_ON: &'static [&'static str] = &["Orders"];
}
