pub mod indicator_task;
pub mod sensor_task;
pub mod transmit_task;
