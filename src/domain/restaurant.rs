/// A restaurant that owns dishes.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub address_first_line: String,
    pub zip_code: String,
    pub phone_number: String,
}

/// Parameters for creating a new restaurant.
#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub address_first_line: String,
    pub zip_code: String,
    pub phone_number: String,
}

/// Field updates for an existing restaurant. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct RestaurantPatch {
    pub name: Option<String>,
    pub address_first_line: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
}

impl Restaurant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address_first_line: impl Into<String>,
        zip_code: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address_first_line: address_first_line.into(),
            zip_code: zip_code.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Composite postal address, `"{address_first_line}, {zip_code}"`.
    pub fn address(&self) -> String {
        format!("{}, {}", self.address_first_line, self.zip_code)
    }
}
