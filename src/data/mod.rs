pub mod cache;
pub mod country;
pub mod iso3166;
pub mod loader;
pub mod record;

pub use cache::{DatasetCache, LoadedDataset};
pub use country::{country_name_or_code, CountryLookup, IsoCountryRegistry, StaticCountryTable};
pub use loader::{load_salaries, load_salaries_from_reader, DEFAULT_DATASET_PATH};
pub use record::{ExperienceLevel, SalaryRecord};
