use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    repository::{
        booking::BookingRepositoryImpl, chain::ChainRepositoryImpl,
        customer::CustomerRepositoryImpl, employee::EmployeeRepositoryImpl,
        health::HealthCheckRepositoryImpl, hotel::HotelRepositoryImpl,
        rental::RentalRepositoryImpl, room::RoomRepositoryImpl,
    },
};
use kernel::repository::{
    booking::BookingRepository, chain::ChainRepository, customer::CustomerRepository,
    employee::EmployeeRepository, health::HealthCheckRepository, hotel::HotelRepository,
    rental::RentalRepository, room::RoomRepository,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    chain_repository: Arc<dyn ChainRepository>,
    hotel_repository: Arc<dyn HotelRepository>,
    room_repository: Arc<dyn RoomRepository>,
    customer_repository: Arc<dyn CustomerRepository>,
    employee_repository: Arc<dyn EmployeeRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    rental_repository: Arc<dyn RentalRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let chain_repository = Arc::new(ChainRepositoryImpl::new(pool.clone()));
        let hotel_repository = Arc::new(HotelRepositoryImpl::new(pool.clone()));
        let room_repository = Arc::new(RoomRepositoryImpl::new(pool.clone()));
        let customer_repository = Arc::new(CustomerRepositoryImpl::new(pool.clone()));
        let employee_repository = Arc::new(EmployeeRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let rental_repository = Arc::new(RentalRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            chain_repository,
            hotel_repository,
            room_repository,
            customer_repository,
            employee_repository,
            booking_repository,
            rental_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn chain_repository(&self) -> Arc<dyn ChainRepository> {
        self.chain_repository.clone()
    }

    pub fn hotel_repository(&self) -> Arc<dyn HotelRepository> {
        self.hotel_repository.clone()
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn customer_repository(&self) -> Arc<dyn CustomerRepository> {
        self.customer_repository.clone()
    }

    pub fn employee_repository(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn rental_repository(&self) -> Arc<dyn RentalRepository> {
        self.rental_repository.clone()
    }
}
