mod test_resources;
mod test_retry;
