pub use super::user::Entity as User;
pub use super::user_friend::Entity as UserFriend;
pub use super::wish::Entity as Wish;
pub use super::wishlist::Entity as Wishlist;
