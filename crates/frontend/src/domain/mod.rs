pub mod a001_atm;
pub mod a002_college_dunia;
pub mod a003_bank;
pub mod a004_heyplaces;
