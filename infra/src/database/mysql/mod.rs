mod order_repository_impl;

pub use order_repository_impl::MySqlOrderRepository;
