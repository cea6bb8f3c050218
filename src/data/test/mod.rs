mod friend;
mod user;
mod wish;
mod wishlist;
