mod arbitration;
mod button_properties;
mod common;
mod console;
