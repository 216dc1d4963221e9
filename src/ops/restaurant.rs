use crate::backend::Backend;
use crate::domain::{Restaurant, RestaurantForm};
use crate::op_framework::{OpFuture, Operation};

/// Query for the authenticated owner's restaurant.
#[derive(Clone)]
pub struct GetMyRestaurant {
    backend: Backend,
}

impl GetMyRestaurant {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

impl Operation for GetMyRestaurant {
    type Input = ();
    type Output = Restaurant;

    fn name(&self) -> &'static str {
        "get_my_restaurant"
    }

    fn run(&self, _input: ()) -> OpFuture<Restaurant> {
        let backend = self.backend.clone();
        Box::pin(async move { backend.get_my_restaurant().await })
    }
}

#[derive(Clone)]
pub struct CreateMyRestaurant {
    backend: Backend,
}

impl CreateMyRestaurant {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

impl Operation for CreateMyRestaurant {
    type Input = RestaurantForm;
    type Output = Restaurant;

    fn name(&self) -> &'static str {
        "create_my_restaurant"
    }

    fn on_success(&self) -> Option<&'static str> {
        Some("Restaurant created!")
    }

    fn on_failure(&self) -> Option<&'static str> {
        Some("Unable to create restaurant")
    }

    fn run(&self, form: RestaurantForm) -> OpFuture<Restaurant> {
        let backend = self.backend.clone();
        Box::pin(async move { backend.create_my_restaurant(form).await })
    }
}

#[derive(Clone)]
pub struct UpdateMyRestaurant {
    backend: Backend,
}

impl UpdateMyRestaurant {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

impl Operation for UpdateMyRestaurant {
    type Input = RestaurantForm;
    type Output = Restaurant;

    fn name(&self) -> &'static str {
        "update_my_restaurant"
    }

    fn on_success(&self) -> Option<&'static str> {
        Some("Restaurant updated")
    }

    fn on_failure(&self) -> Option<&'static str> {
        Some("Unable to update restaurant")
    }

    fn run(&self, form: RestaurantForm) -> OpFuture<Restaurant> {
        let backend = self.backend.clone();
        Box::pin(async move { backend.update_my_restaurant(form).await })
    }
}
