//! Startup seed data.
//!
//! Each collection starts with the same three literal records on every
//! process start. Seed timestamps are fixed so restarts are reproducible.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Car, Order, OrderItem, OrderStatus, Product, User};

const SEED_ORDER_TIMESTAMP: &str = "2025-11-07T18:18:08.792Z";

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "João Silva".to_string(),
            email: "joao@example.com".to_string(),
            age: 30,
        },
        User {
            id: "2".to_string(),
            name: "Maria Santos".to_string(),
            email: "maria@example.com".to_string(),
            age: 25,
        },
        User {
            id: "3".to_string(),
            name: "Pedro Oliveira".to_string(),
            email: "pedro@example.com".to_string(),
            age: 35,
        },
    ]
}

pub fn cars() -> Vec<Car> {
    vec![
        Car {
            id: "1".to_string(),
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
            color: "White".to_string(),
            price: 85000.0,
        },
        Car {
            id: "2".to_string(),
            brand: "Honda".to_string(),
            model: "Civic".to_string(),
            year: 2021,
            color: "Black".to_string(),
            price: 92000.0,
        },
        Car {
            id: "3".to_string(),
            brand: "Ford".to_string(),
            model: "Focus".to_string(),
            year: 2019,
            color: "Red".to_string(),
            price: 75000.0,
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Notebook".to_string(),
            description: "Notebook Dell Inspiron".to_string(),
            price: 3500.0,
            stock: 10,
            category: "Electronics".to_string(),
        },
        Product {
            id: "2".to_string(),
            name: "Mouse".to_string(),
            description: "Mouse Logitech Wireless".to_string(),
            price: 150.0,
            stock: 50,
            category: "Electronics".to_string(),
        },
        Product {
            id: "3".to_string(),
            name: "Teclado".to_string(),
            description: "Teclado Mecânico RGB".to_string(),
            price: 450.0,
            stock: 25,
            category: "Electronics".to_string(),
        },
    ]
}

pub fn orders() -> Vec<Order> {
    let created_at = seed_timestamp();

    vec![
        Order {
            id: "1".to_string(),
            user_id: "1".to_string(),
            items: vec![OrderItem {
                product_id: "1".to_string(),
                quantity: 2,
                price: 3500.0,
            }],
            total: 7000.0,
            status: OrderStatus::Pending,
            created_at,
        },
        Order {
            id: "2".to_string(),
            user_id: "2".to_string(),
            items: vec![OrderItem {
                product_id: "2".to_string(),
                quantity: 1,
                price: 150.0,
            }],
            total: 150.0,
            status: OrderStatus::Completed,
            created_at,
        },
        Order {
            id: "3".to_string(),
            user_id: "1".to_string(),
            items: vec![OrderItem {
                product_id: "3".to_string(),
                quantity: 1,
                price: 450.0,
            }],
            total: 450.0,
            status: OrderStatus::Processing,
            created_at,
        },
    ]
}

fn seed_timestamp() -> DateTime<Utc> {
    SEED_ORDER_TIMESTAMP
        .parse()
        .expect("seed timestamp is valid RFC 3339")
}
