mod test_date;
mod test_logger;
