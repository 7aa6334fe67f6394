mod enrollment;
mod payment;
mod price_history;
