use chrono::{NaiveDate, TimeZone, Utc};
use landing_storefront_api::domain::{
    ordering::{OrderStatus, ProductStatus, QuantityBounds, QuantityError, check_quantity, order_total},
    ratings::{is_valid_score, summarize},
    slug::{generate_slug, slugify},
    views::{ViewPeriod, clamp_series_days, fill_daily_buckets, series_start},
};
use landing_storefront_api::dto::orders::{BatchStatusRequest, CreateOrderRequest};
use landing_storefront_api::routes::params::Pagination;
use landing_storefront_api::services::analytics_service::{order_breakdown, product_counts};
use uuid::Uuid;

const BOUNDS: QuantityBounds = QuantityBounds {
    min: 5,
    max: Some(10),
    stock: 20,
};

#[test]
fn quantity_bounds_are_checked_in_order() {
    assert_eq!(check_quantity(3, BOUNDS), Err(QuantityError::BelowMinimum(5)));
    assert_eq!(check_quantity(15, BOUNDS), Err(QuantityError::AboveMaximum(10)));
    assert_eq!(check_quantity(7, BOUNDS), Ok(()));

    let low_stock = QuantityBounds { stock: 6, ..BOUNDS };
    assert_eq!(check_quantity(7, low_stock), Err(QuantityError::InsufficientStock(6)));
}

#[test]
fn quantity_error_messages() {
    assert_eq!(
        QuantityError::BelowMinimum(5).to_string(),
        "Minimum order quantity is 5"
    );
    assert_eq!(
        QuantityError::AboveMaximum(10).to_string(),
        "Maximum order quantity is 10"
    );
    assert_eq!(
        QuantityError::InsufficientStock(2).to_string(),
        "Insufficient stock, only 2 available"
    );
}

#[test]
fn zero_quantity_is_rejected_even_with_low_minimum() {
    let bounds = QuantityBounds {
        min: 1,
        max: None,
        stock: 10,
    };
    assert_eq!(check_quantity(0, bounds), Err(QuantityError::BelowMinimum(1)));

    let unset_min = QuantityBounds { min: 0, ..bounds };
    assert_eq!(check_quantity(0, unset_min), Err(QuantityError::BelowMinimum(1)));
    assert_eq!(check_quantity(11, bounds), Err(QuantityError::InsufficientStock(10)));
}

#[test]
fn totals_are_checked() {
    assert_eq!(order_total(1999, 3), Some(5997));
    assert_eq!(order_total(i64::MAX, 2), None);
}

#[test]
fn order_status_round_trips_through_text() {
    for status in OrderStatus::ALL {
        assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
    }
    let err = "refunded".parse::<OrderStatus>().unwrap_err();
    assert_eq!(err.to_string(), "Invalid status: refunded");
    assert!("Pending".parse::<OrderStatus>().is_err());

    assert!(OrderStatus::Delivered.allows_rating());
    assert!(OrderStatus::Completed.allows_rating());
    assert!(!OrderStatus::Shipped.allows_rating());

    assert_eq!("inactive".parse::<ProductStatus>(), Ok(ProductStatus::Inactive));
    assert!("archived".parse::<ProductStatus>().is_err());
}

#[test]
fn batch_status_request_checks_ids_before_status() {
    let empty = BatchStatusRequest {
        order_ids: Vec::new(),
        status: "shipped".into(),
    };
    assert!(empty.parse().is_err());

    let bad_status = BatchStatusRequest {
        order_ids: vec![Uuid::new_v4()],
        status: "lost".into(),
    };
    assert_eq!(bad_status.parse().unwrap_err().to_string(), "Invalid status: lost");

    let ok = BatchStatusRequest {
        order_ids: vec![Uuid::new_v4()],
        status: "shipped".into(),
    };
    assert_eq!(ok.parse().unwrap(), OrderStatus::Shipped);
}

#[test]
fn order_request_requires_contact_fields() {
    let request = CreateOrderRequest {
        product_id: Uuid::new_v4(),
        customer_name: "Ada".into(),
        customer_email: "ada@example.com".into(),
        customer_phone: None,
        shipping_address: "1 Main St".into(),
        city: "Springfield".into(),
        postal_code: None,
        country: "US".into(),
        quantity: 1,
        size: None,
        color: None,
        notes: None,
    };
    assert!(request.validate().is_ok());

    let blank_city = CreateOrderRequest {
        city: "  ".into(),
        ..request.clone()
    };
    assert_eq!(blank_city.validate().unwrap_err().to_string(), "city is required");

    let bad_email = CreateOrderRequest {
        customer_email: "ada".into(),
        ..request
    };
    assert!(bad_email.validate().is_err());
}

#[test]
fn slugs_are_url_safe() {
    assert_eq!(slugify("  Summer Dress -- 2024!  "), "summer-dress-2024");
    assert_eq!(slugify("¡¡¡"), "product");
    assert!(slugify(&"a".repeat(200)).len() <= 60);

    let slug = generate_slug("Linen Shirt");
    assert!(slug.starts_with("linen-shirt-"));
    assert_eq!(slug.len(), "linen-shirt-".len() + 6);
    assert_ne!(slug, generate_slug("Linen Shirt"));
}

#[test]
fn rating_summary_rounds_to_two_decimals() {
    let summary = summarize(&[5, 4, 4]);
    assert_eq!(summary.count, 3);
    assert_eq!(summary.average, 4.33);

    let empty = summarize(&[]);
    assert_eq!(empty.count, 0);
    assert_eq!(empty.average, 0.0);

    assert!(is_valid_score(1));
    assert!(is_valid_score(5));
    assert!(!is_valid_score(0));
    assert!(!is_valid_score(6));
}

#[test]
fn view_windows() {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 15, 30, 0).unwrap();

    assert_eq!(ViewPeriod::All.since(now), None);
    assert_eq!(
        ViewPeriod::Week.since(now),
        Some(Utc.with_ymd_and_hms(2024, 3, 3, 15, 30, 0).unwrap())
    );
    assert_eq!(clamp_series_days(None), 30);
    assert_eq!(clamp_series_days(Some(0)), 1);
    assert_eq!(clamp_series_days(Some(365)), 90);
    assert_eq!(
        series_start(now, 3),
        Utc.with_ymd_and_hms(2024, 3, 8, 0, 0, 0).unwrap()
    );
}

#[test]
fn daily_buckets_are_zero_filled_oldest_first() {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
    let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();

    let buckets = fill_daily_buckets(now, 3, &[(day(10), 4), (day(8), 1)]);

    assert_eq!(buckets, vec![(day(8), 1), (day(9), 0), (day(10), 4)]);
}

#[test]
fn analytics_folds() {
    let counts = product_counts(&[
        ("active".into(), false, 3),
        ("draft".into(), false, 2),
        ("active".into(), true, 1),
    ]);
    assert_eq!(counts.total, 6);
    assert_eq!(counts.active, 3);
    assert_eq!(counts.draft, 2);
    assert_eq!(counts.archived, 1);

    let (statuses, order_count, revenue) = order_breakdown(&[
        ("pending".into(), 2, 3000),
        ("cancelled".into(), 1, 500),
        ("delivered".into(), 1, 1200),
    ]);
    assert_eq!(statuses.len(), OrderStatus::ALL.len());
    assert_eq!(statuses[0].status, "pending");
    assert_eq!(statuses[0].count, 2);
    assert_eq!(order_count, 4);
    assert_eq!(revenue, 4200);
}

#[test]
fn pagination_defaults_and_clamps() {
    assert_eq!(Pagination::default().normalize(), (1, 20, 0));

    let clamped = Pagination {
        page: Some(0),
        per_page: Some(1_000),
    };
    assert_eq!(clamped.normalize(), (1, 100, 0));

    let third = Pagination {
        page: Some(3),
        per_page: Some(25),
    };
    assert_eq!(third.normalize(), (3, 25, 50));
}

#[test]
fn huge_page_number_saturates_the_offset() {
    let (page, per_page, offset) = Pagination {
        page: Some(i64::MAX),
        per_page: Some(100),
    }
    .normalize();

    assert_eq!(page, i64::MAX);
    assert_eq!(per_page, 100);
    assert_eq!(offset, i64::MAX);
}
