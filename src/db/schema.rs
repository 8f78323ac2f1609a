diesel::table! {
    accounts (user_name) {
        user_name -> Varchar,
        encrypted_password -> Varchar,
        active -> Bool,
        user_role -> Varchar,
    }
}

diesel::table! {
    products (code) {
        code -> Varchar,
        name -> Varchar,
        price -> Float8,
        description -> Text,
        active -> Bool,
        create_date -> Timestamp,
    }
}

diesel::table! {
    orders (id) {
        id -> Varchar,
        order_num -> Int4,
        order_date -> Timestamp,
        status -> Varchar,
        amount -> Float8,
        customer_name -> Varchar,
        customer_address -> Varchar,
        customer_email -> Varchar,
        customer_phone -> Varchar,
    }
}

diesel::table! {
    order_details (id) {
        id -> Varchar,
        order_id -> Varchar,
        product_code -> Varchar,
        quantity -> Int4,
        price -> Float8,
        amount -> Float8,
    }
}

diesel::joinable!(order_details -> orders (order_id));
diesel::joinable!(order_details -> products (product_code));

diesel::allow_tables_to_appear_in_same_query!(
    accounts,
    products,
    orders,
    order_details,
);
