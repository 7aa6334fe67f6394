use crate::server::{error::AppError, service::enrollment::EnrollmentService};
use entity::payment::PaymentStatus;
use test_utils::{builder::TestBuilder, factory};
