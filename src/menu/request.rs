use std::str::FromStr;

use crate::error::{CafeError, Result};
use crate::menu::attachment::AddOn;
use crate::menu::catalog::{
    CatalogOption, CreamKind, FlavorKind, MilkKind, ShotKind, SugarKind, SyrupKind,
};

fn find_option<T: CatalogOption>(name: &str) -> Result<T> {
    T::find(name).ok_or_else(|| CafeError::UnknownVariant {
        kind: T::KIND.to_string(),
        name: name.to_string(),
    })
}

fn parse_count(quantity: Option<&str>) -> Result<i64> {
    match quantity {
        None => Ok(1),
        Some(q) => q
            .trim()
            .parse()
            .map_err(|_| CafeError::InvalidInput(format!("'{}' is not a whole number", q))),
    }
}

fn parse_intensity(quantity: Option<&str>) -> Result<f64> {
    match quantity {
        None => Ok(1.0),
        Some(q) => q
            .trim()
            .parse()
            .map_err(|_| CafeError::InvalidInput(format!("'{}' is not a number", q))),
    }
}

/// Parse an add-on request such as `milk=almond`, `sugar=honey:2` or
/// `flavor=vanilla:1.5`.
///
/// Only malformed text is rejected; quantities out of range are clamped like
/// any other add-on.
pub fn parse_add_on(request: &str) -> Result<AddOn> {
    let (kind, rest) = request.split_once('=').ok_or_else(|| {
        CafeError::InvalidInput(format!("expected kind=option, got '{}'", request))
    })?;

    let (option, quantity) = match rest.split_once(':') {
        Some((option, quantity)) => (option, Some(quantity)),
        None => (rest, None),
    };

    let kind: String = kind
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect();

    match kind.as_str() {
        "milk" => {
            if quantity.is_some() {
                return Err(CafeError::InvalidInput("milk takes no quantity".to_string()));
            }
            Ok(AddOn::milk(find_option::<MilkKind>(option)?))
        }
        "sugar" => Ok(AddOn::sugar(
            find_option::<SugarKind>(option)?,
            parse_count(quantity)?,
        )),
        "flavor" | "flavour" => Ok(AddOn::flavor(
            find_option::<FlavorKind>(option)?,
            parse_intensity(quantity)?,
        )),
        "syrup" => Ok(AddOn::syrup(
            find_option::<SyrupKind>(option)?,
            parse_count(quantity)?,
        )),
        "shot" | "extrashot" => Ok(AddOn::extra_shot(
            find_option::<ShotKind>(option)?,
            parse_count(quantity)?,
        )),
        "cream" | "whippedcream" | "whipped" => Ok(AddOn::whipped_cream(
            find_option::<CreamKind>(option)?,
            parse_intensity(quantity)?,
        )),
        _ => Err(CafeError::UnknownAddOn(kind)),
    }
}

impl FromStr for AddOn {
    type Err = CafeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_add_on(s)
    }
}
