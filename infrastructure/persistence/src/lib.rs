pub mod db;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod catalog;
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
