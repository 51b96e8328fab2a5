use chrono::Utc;
use models::brand::Brand;
use models::car::Car;
use uuid::Uuid;

/// Fixture cars, each with a freshly generated id.
pub fn cars() -> Vec<Car> {
    [(1, "Toyota", "Corolla"), (2, "Honda", "Civic"), (3, "Jeep", "Cherokee")]
        .into_iter()
        .map(|(sku, brand, model)| Car {
            id: Uuid::new_v4(),
            sku,
            brand: brand.to_string(),
            model: model.to_string(),
        })
        .collect()
}

/// Fixture brands, stamped with the current time.
pub fn brands() -> Vec<Brand> {
    let now = Utc::now().timestamp_millis();
    ["Toyota", "Chevrolet", "Volvo"]
        .into_iter()
        .map(|name| Brand {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: now,
            updated_at: None,
        })
        .collect()
}
