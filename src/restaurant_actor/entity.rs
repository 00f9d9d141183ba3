use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::fields::{required_text, ADDRESS_MAX_LEN, NAME_MAX_LEN, PHONE_NUMBER_MAX_LEN, ZIP_CODE_MAX_LEN};
use crate::domain::{Restaurant, RestaurantCreate, RestaurantPatch};

fn text(field: &str, value: &str, max_len: usize) -> Result<String, FrameworkError> {
    required_text(field, value, max_len).map_err(FrameworkError::Validation)
}

impl Entity for Restaurant {
    type Id = String;
    type CreateParams = RestaurantCreate;
    type Patch = RestaurantPatch;
    type Action = ();
    type ActionResult = ();

    /// Creates a new Restaurant, trimming and length-checking every text field.
    fn from_create_params(id: String, params: RestaurantCreate) -> Result<Self, FrameworkError> {
        Ok(Self {
            id,
            name: text("name", &params.name, NAME_MAX_LEN)?,
            address_first_line: text("address_first_line", &params.address_first_line, ADDRESS_MAX_LEN)?,
            zip_code: text("zip_code", &params.zip_code, ZIP_CODE_MAX_LEN)?,
            phone_number: text("phone_number", &params.phone_number, PHONE_NUMBER_MAX_LEN)?,
        })
    }

    fn on_update(&mut self, patch: RestaurantPatch) -> Result<(), FrameworkError> {
        if let Some(name) = patch.name {
            self.name = text("name", &name, NAME_MAX_LEN)?;
        }
        if let Some(line) = patch.address_first_line {
            self.address_first_line = text("address_first_line", &line, ADDRESS_MAX_LEN)?;
        }
        if let Some(zip_code) = patch.zip_code {
            self.zip_code = text("zip_code", &zip_code, ZIP_CODE_MAX_LEN)?;
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = text("phone_number", &phone_number, PHONE_NUMBER_MAX_LEN)?;
        }
        Ok(())
    }

    /// No custom actions are defined for restaurants.
    fn handle_action(&mut self, _action: ()) -> Result<(), FrameworkError> {
        Ok(())
    }
}
