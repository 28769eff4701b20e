mod booking;
mod linked;
