mod applicant;
mod income;
mod protection;
mod vehicle;

pub use applicant::{
    AddressInfo, EmploymentInfo, EmploymentStatus, HousingStatus, PersonalInfo,
};
pub use income::{IncomeSource, IncomeSourceId};
pub use protection::ProtectionOptions;
pub use vehicle::{Vehicle, VehicleId};
