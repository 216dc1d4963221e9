#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;
    use tokio::sync::mpsc;

    use crate::app_system::PortalSystem;
    use crate::auth::static_source;
    use crate::config::PortalConfig;
    use crate::domain::{RestaurantForm, UpdateOrderStatusRequest, UpdateUserRequest};
    use crate::notify::Notice;
    use crate::op_framework::OpState;
    use crate::pages::{ProfileView, UserProfilePage};

    fn portal(base_url: &str) -> (PortalSystem, mpsc::Receiver<Notice>) {
        PortalSystem::with_notices(PortalConfig::new(base_url), static_source("test-token"))
    }

    fn restaurant_body() -> serde_json::Value {
        json!({
            "_id": "r1",
            "restaurantName": "Taco Town",
            "city": "Leeds",
            "country": "UK",
            "deliveryPrice": 2.5,
            "estimatedDeliveryTime": 30,
            "cuisines": ["Mexican"],
            "menuItems": [{"name": "Taco", "price": 4.0}]
        })
    }

    #[tokio::test]
    async fn fetch_restaurant_success_updates_query_state() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET)
                .path("/api/my/restaurant")
                .header("authorization", "Bearer test-token");
            then.status(200).json_body(restaurant_body());
        });

        let (system, _toasts) = portal(&server.base_url());
        let restaurant = system.restaurants.get_my_restaurant().await.unwrap();

        assert_eq!(restaurant.restaurant_name, "Taco Town");
        assert!(system.restaurants.fetch_state().await.unwrap().is_success());
        assert_eq!(
            system.restaurants.cached_restaurant().await.unwrap(),
            Some(restaurant)
        );
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn fetch_restaurant_failure_exposes_error_state_without_data() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/api/my/restaurant");
            then.status(404);
        });

        let (system, _toasts) = portal(&server.base_url());
        let err = system.restaurants.get_my_restaurant().await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to get restaurant");
        assert!(system.restaurants.fetch_state().await.unwrap().is_error());
        assert_eq!(system.restaurants.cached_restaurant().await.unwrap(), None);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn create_restaurant_emits_exactly_one_success_notice() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(POST)
                .path("/api/my/restaurant")
                .body_contains("restaurantName")
                .body_contains("Taco Town");
            then.status(201).json_body(restaurant_body());
        });

        let (system, mut toasts) = portal(&server.base_url());
        let form = RestaurantForm {
            restaurant_name: "Taco Town".into(),
            city: "Leeds".into(),
            country: "UK".into(),
            delivery_price: 2.5,
            estimated_delivery_time: 30,
            ..Default::default()
        };
        let restaurant = system.restaurants.create_my_restaurant(form).await.unwrap();

        assert_eq!(restaurant.id, "r1");
        assert_eq!(toasts.recv().await, Some(Notice::success("Restaurant created!")));
        assert!(toasts.try_recv().is_err());
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn create_restaurant_failure_notifies_and_resets_consistently() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(POST).path("/api/my/restaurant");
            then.status(400).json_body(json!({"message": "duplicate"}));
        });

        let (system, mut toasts) = portal(&server.base_url());
        let err = system
            .restaurants
            .create_my_restaurant(RestaurantForm::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to create restaurant");
        assert_eq!(
            toasts.recv().await,
            Some(Notice::error("Unable to create restaurant"))
        );

        // Every mutation resets the same way; the failed flag does not stick.
        assert!(system.restaurants.create_state().await.unwrap().is_error());
        system.restaurants.reset_create().await.unwrap();
        assert_eq!(system.restaurants.create_state().await.unwrap(), OpState::Idle);
        assert!(toasts.try_recv().is_err());
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn update_restaurant_uses_distinct_notice() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(PUT).path("/api/my/restaurant");
            then.status(200).json_body(restaurant_body());
        });

        let (system, mut toasts) = portal(&server.base_url());
        system
            .restaurants
            .update_my_restaurant(RestaurantForm::default())
            .await
            .unwrap();

        assert_eq!(toasts.recv().await, Some(Notice::success("Restaurant updated")));
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn order_status_update_hits_sub_resource_once() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/api/my/restaurant/order/abc/status")
                .header("authorization", "Bearer test-token")
                .json_body(json!({"status": "Confirmed"}));
            then.status(200);
        });

        let (system, mut toasts) = portal(&server.base_url());
        system
            .orders
            .update_order_status(UpdateOrderStatusRequest {
                order_id: "abc".into(),
                status: "Confirmed".into(),
            })
            .await
            .unwrap();

        mock.assert();
        // Exactly one success notice, delivered before any reset.
        assert_eq!(toasts.recv().await, Some(Notice::success("Order updated")));
        assert!(toasts.try_recv().is_err());

        system.orders.reset_status_update().await.unwrap();
        assert_eq!(
            system.orders.status_update_state().await.unwrap(),
            OpState::Idle
        );
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn order_status_failure_notifies_once() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(PATCH).path("/api/my/restaurant/order/abc/status");
            then.status(500);
        });

        let (system, mut toasts) = portal(&server.base_url());
        let err = system
            .orders
            .update_order_status(UpdateOrderStatusRequest {
                order_id: "abc".into(),
                status: "Confirmed".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to update status");
        assert_eq!(toasts.recv().await, Some(Notice::error("Unable to update status")));
        assert!(toasts.try_recv().is_err());
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn orders_query_preserves_backend_sequence() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/api/my/restaurant/order");
            then.status(200).json_body(json!([
                {
                    "_id": "ord_2",
                    "status": "paid",
                    "deliveryDetails": {
                        "name": "Bob", "email": "bob@example.com",
                        "addressLine1": "2 Low St", "city": "York"
                    },
                    "totalAmount": 20.0,
                    "createdAt": "2024-05-02T09:00:00Z"
                },
                {
                    "_id": "ord_1",
                    "status": "delivered",
                    "deliveryDetails": {
                        "name": "Alice", "email": "alice@example.com",
                        "addressLine1": "1 High St", "city": "Leeds"
                    },
                    "totalAmount": 12.5,
                    "createdAt": "2024-05-01T10:00:00Z"
                }
            ]));
        });

        let (system, _toasts) = portal(&server.base_url());
        let orders = system.orders.get_my_orders().await.unwrap();

        assert_eq!(
            orders.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(),
            ["ord_2", "ord_1"]
        );
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn profile_page_flows_from_loading_to_form_and_saves() {
        let server = MockServer::start();
        let user_body = json!({
            "_id": "u1",
            "email": "alice@example.com",
            "name": "Alice",
            "addressLine1": "1 High St",
            "city": "Leeds",
            "country": "UK"
        });
        let _get = server.mock(|when, then| {
            when.method(GET).path("/api/my/user");
            then.status(200).json_body(user_body.clone());
        });
        let put = server.mock(|when, then| {
            when.method(PUT).path("/api/my/user").json_body(json!({
                "name": "Alice",
                "addressLine1": "9 New Rd",
                "city": "Leeds",
                "country": "UK"
            }));
            then.status(200).json_body(user_body);
        });

        let (system, mut toasts) = portal(&server.base_url());
        let page = UserProfilePage::new(system.users.clone());

        assert_eq!(page.view().await.unwrap(), ProfileView::Loading);

        let user = page.load().await.unwrap();
        assert_eq!(user.name, "Alice");
        match page.view().await.unwrap() {
            ProfileView::Form(form) => {
                assert_eq!(form.current_user, user);
                assert!(!form.is_saving);
            }
            other => panic!("Expected form view, got: {:?}", other),
        }

        page.save(UpdateUserRequest {
            name: "Alice".into(),
            address_line1: "9 New Rd".into(),
            city: "Leeds".into(),
            country: "UK".into(),
        })
        .await
        .unwrap();

        put.assert();
        assert_eq!(toasts.recv().await, Some(Notice::success("User profile updated!")));
        drop(page);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn profile_page_shows_error_when_user_cannot_load() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/api/my/user");
            then.status(401);
        });

        let (system, _toasts) = portal(&server.base_url());
        let page = UserProfilePage::new(system.users.clone());

        page.load().await.unwrap_err();
        assert_eq!(page.view().await.unwrap(), ProfileView::LoadFailed);
        drop(page);
        system.shutdown().await.unwrap();
    }
}
