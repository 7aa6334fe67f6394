pub use super::career::Entity as Career;
pub use super::career_price::Entity as CareerPrice;
pub use super::enrollment::Entity as Enrollment;
pub use super::news::Entity as News;
pub use super::payment::Entity as Payment;
pub use super::user::Entity as User;
pub use super::user_detail::Entity as UserDetail;
