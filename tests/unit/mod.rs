mod model;
mod utils;
