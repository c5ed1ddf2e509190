
mod parse_good;
