// Diesel table declarations matching `diesel_runtime::database::SCHEMA_SQL`.

diesel::table! {
    #[sql_name = "Categories"]
    categories (category_id) {
        category_id -> Integer,
        category_name -> Text,
    }
}

diesel::table! {
    #[sql_name = "Products"]
    products (product_id) {
        product_id -> Integer,
        product_name -> Text,
        category_id -> Integer,
        price -> Double,
        stock -> Integer,
    }
}

diesel::table! {
    #[sql_name = "Customers"]
    customers (customer_id) {
        customer_id -> Integer,
        customer_name -> Text,
        gender -> Nullable<Text>,
        date_of_birth -> Nullable<Date>,
        email -> Nullable<Text>,
        phone_number -> Nullable<Text>,
        address -> Nullable<Text>,
        customer_tier -> Nullable<Text>,
        registration_date -> Nullable<Date>,
        total_spent -> Nullable<Double>,
    }
}

diesel::table! {
    #[sql_name = "Orders"]
    orders (order_id) {
        order_id -> Integer,
        customer_id -> Integer,
        order_date -> Nullable<Date>,
        order_total -> Nullable<Double>,
        promo_code -> Nullable<Text>,
    }
}

diesel::table! {
    #[sql_name = "Order_Items"]
    order_items (order_id, item_no) {
        order_id -> Integer,
        item_no -> Integer,
        product_id -> Nullable<Integer>,
        quantity -> Nullable<Integer>,
        unit_price -> Nullable<Double>,
        line_total -> Nullable<Double>,
    }
}

diesel::table! {
    #[sql_name = "Shipments"]
    shipments (shipment_id) {
        shipment_id -> Integer,
        order_id -> Integer,
        shipped_date -> Nullable<Date>,
        delivery_date -> Nullable<Date>,
        carrier -> Nullable<Text>,
        tracking_number -> Nullable<Text>,
    }
}

diesel::joinable!(products -> categories (category_id));
diesel::joinable!(orders -> customers (customer_id));
diesel::joinable!(order_items -> orders (order_id));
diesel::joinable!(shipments -> orders (order_id));

diesel::allow_tables_to_appear_in_same_query!(
    categories,
    products,
    customers,
    orders,
    order_items,
    shipments,
);
