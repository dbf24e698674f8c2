//! Servicio de ranking de popularidad
//!
//! Score bayesiano estilo IMDB: mezcla del promedio propio del auto con el
//! promedio global, ponderada por la cantidad de reviews frente a la
//! constante de prior m.

use crate::models::car::Car;
use crate::models::review::Review;

/// Peso del prior por defecto
pub const DEFAULT_PRIOR_WEIGHT: f64 = 2.0;

/// Límite por defecto del listado de populares
pub const DEFAULT_POPULAR_LIMIT: usize = 4;

/// Auto con su score de popularidad calculado
#[derive(Debug)]
pub struct ScoredCar {
    pub car: Car,
    pub score: f64,
}

/// Ranking de autos por score bayesiano, función pura sobre colecciones en
/// memoria. Sin reviews en absoluto devuelve los primeros `limit` autos en el
/// orden de entrada; un auto sin reviews puntúa 0. El sort es estable, los
/// empates conservan el orden de entrada.
pub fn calculate_popular_cars(
    cars: Vec<Car>,
    reviews: &[Review],
    limit: usize,
    threshold_m: f64,
) -> Vec<ScoredCar> {
    if reviews.is_empty() {
        return cars
            .into_iter()
            .take(limit)
            .map(|car| ScoredCar { car, score: 0.0 })
            .collect();
    }

    let global_mean: f64 =
        reviews.iter().map(|r| r.rating as f64).sum::<f64>() / reviews.len() as f64;
    let m = threshold_m;

    let mut scored: Vec<ScoredCar> = cars
        .into_iter()
        .map(|car| {
            let car_ratings: Vec<f64> = reviews
                .iter()
                .filter(|r| r.car_id == car.id)
                .map(|r| r.rating as f64)
                .collect();
            let v = car_ratings.len() as f64;

            let score = if car_ratings.is_empty() {
                0.0
            } else {
                let own_mean = car_ratings.iter().sum::<f64>() / v;
                (v / (v + m)) * own_mean + (m / (v + m)) * global_mean
            };

            ScoredCar { car, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn car(id: Uuid, brand: &str) -> Car {
        Car {
            id,
            brand: brand.to_string(),
            model: "Test".to_string(),
            year: 2022,
            price_per_day: 100,
            transmission: "Automatic".to_string(),
            fuel_type: "Petrol".to_string(),
            seats: 5,
            image_url: None,
            description: None,
            car_class: "Economy".to_string(),
            status: "Available".to_string(),
            location_id: None,
            created_at: Utc::now(),
        }
    }

    fn review(car_id: Uuid, rating: i32) -> Review {
        Review {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            car_id,
            booking_id: Uuid::new_v4(),
            rating,
            comment: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_reviews_returns_first_cars_in_order() {
        let ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let cars: Vec<Car> = ids.iter().map(|id| car(*id, "Brand")).collect();

        let ranked = calculate_popular_cars(cars, &[], 3, DEFAULT_PRIOR_WEIGHT);

        assert_eq!(ranked.len(), 3);
        for (scored, id) in ranked.iter().zip(&ids) {
            assert_eq!(scored.car.id, *id);
            assert_eq!(scored.score, 0.0);
        }
    }

    #[test]
    fn test_zero_review_car_scores_zero() {
        let rated = Uuid::new_v4();
        let unrated = Uuid::new_v4();
        let cars = vec![car(unrated, "Unrated"), car(rated, "Rated")];
        let reviews = vec![review(rated, 8), review(rated, 9)];

        let ranked = calculate_popular_cars(cars, &reviews, 10, DEFAULT_PRIOR_WEIGHT);

        // El auto con reviews >= promedio global queda estrictamente arriba
        assert_eq!(ranked[0].car.id, rated);
        assert!(ranked[0].score > 0.0);
        assert_eq!(ranked[1].car.id, unrated);
        assert_eq!(ranked[1].score, 0.0);
    }

    #[test]
    fn test_bayesian_blend() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let cars = vec![car(a, "A"), car(b, "B")];
        // Global: (8 + 8 + 4) / 3 = 20/3
        let reviews = vec![review(a, 8), review(a, 8), review(b, 4)];

        let ranked = calculate_popular_cars(cars, &reviews, 10, 2.0);

        let global = 20.0 / 3.0;
        // A: v=2, R=8 -> 0.5*8 + 0.5*global
        let expected_a = 0.5 * 8.0 + 0.5 * global;
        // B: v=1, R=4 -> (1/3)*4 + (2/3)*global
        let expected_b = (1.0 / 3.0) * 4.0 + (2.0 / 3.0) * global;

        assert_eq!(ranked[0].car.id, a);
        assert!((ranked[0].score - expected_a).abs() < 1e-9);
        assert_eq!(ranked[1].car.id, b);
        assert!((ranked[1].score - expected_b).abs() < 1e-9);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let rated = Uuid::new_v4();
        let cars = vec![car(first, "First"), car(second, "Second"), car(rated, "Rated")];
        let reviews = vec![review(rated, 7)];

        let ranked = calculate_popular_cars(cars, &reviews, 10, DEFAULT_PRIOR_WEIGHT);

        assert_eq!(ranked[0].car.id, rated);
        // Ambos sin reviews empatan en 0 y conservan el orden de entrada
        assert_eq!(ranked[1].car.id, first);
        assert_eq!(ranked[2].car.id, second);
    }

    #[test]
    fn test_limit_truncates() {
        let rated = Uuid::new_v4();
        let mut cars = vec![car(rated, "Rated")];
        for _ in 0..5 {
            cars.push(car(Uuid::new_v4(), "Filler"));
        }
        let reviews = vec![review(rated, 10)];

        let ranked = calculate_popular_cars(cars, &reviews, 2, DEFAULT_PRIOR_WEIGHT);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].car.id, rated);
    }
}
