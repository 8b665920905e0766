mod main_flag;
mod telephone;
mod telephone_type;
