use log::{debug, warn};

use crate::menu::beverage::Beverage;
use crate::menu::catalog::{
    CatalogOption, CreamKind, FlavorKind, MilkKind, ShotKind, SugarKind, SyrupKind,
};
use crate::menu::constants::*;
use crate::models::Size;

/// One customization and its parameters.
///
/// Quantities are clamped into range by the constructors and again when the
/// add-on is attached, so an `Attachment` never carries out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddOn {
    Milk(MilkKind),
    Sugar { kind: SugarKind, packets: u32 },
    Flavor { kind: FlavorKind, intensity: f64 },
    Syrup { kind: SyrupKind, pumps: u32 },
    ExtraShot { kind: ShotKind, shots: u32 },
    WhippedCream { kind: CreamKind, amount: f64 },
}

fn clamp_count(kind: &str, requested: i64, min: u32, max: u32) -> u32 {
    let clamped = requested.clamp(min as i64, max as i64) as u32;
    if clamped as i64 != requested {
        warn!("{} quantity {} out of range, using {}", kind, requested, clamped);
    }
    clamped
}

fn clamp_intensity(kind: &str, requested: f64) -> f64 {
    let clamped = if requested.is_nan() {
        1.0
    } else {
        requested.clamp(MIN_INTENSITY, MAX_INTENSITY)
    };
    if clamped != requested {
        warn!("{} intensity {} out of range, using {}", kind, requested, clamped);
    }
    clamped
}

impl AddOn {
    pub fn milk(kind: MilkKind) -> Self {
        AddOn::Milk(kind)
    }

    /// Negative packet counts become zero.
    pub fn sugar(kind: SugarKind, packets: i64) -> Self {
        AddOn::Sugar {
            kind,
            packets: clamp_count(SugarKind::KIND, packets, 0, u32::MAX),
        }
    }

    pub fn flavor(kind: FlavorKind, intensity: f64) -> Self {
        AddOn::Flavor {
            kind,
            intensity: clamp_intensity(FlavorKind::KIND, intensity),
        }
    }

    pub fn syrup(kind: SyrupKind, pumps: i64) -> Self {
        AddOn::Syrup {
            kind,
            pumps: clamp_count(SyrupKind::KIND, pumps, SYRUP_MIN_PUMPS, SYRUP_MAX_PUMPS),
        }
    }

    pub fn extra_shot(kind: ShotKind, shots: i64) -> Self {
        AddOn::ExtraShot {
            kind,
            shots: clamp_count(ShotKind::KIND, shots, MIN_EXTRA_SHOTS, MAX_EXTRA_SHOTS),
        }
    }

    pub fn whipped_cream(kind: CreamKind, amount: f64) -> Self {
        AddOn::WhippedCream {
            kind,
            amount: clamp_intensity(CreamKind::KIND, amount),
        }
    }

    /// Re-apply the range rules to a value that may have been built directly.
    pub fn normalized(self) -> Self {
        match self {
            AddOn::Milk(_) => self,
            AddOn::Sugar { .. } => self,
            AddOn::Flavor { kind, intensity } => AddOn::flavor(kind, intensity),
            AddOn::Syrup { kind, pumps } => AddOn::syrup(kind, pumps as i64),
            AddOn::ExtraShot { kind, shots } => AddOn::extra_shot(kind, shots as i64),
            AddOn::WhippedCream { kind, amount } => AddOn::whipped_cream(kind, amount),
        }
    }

    /// Catalog kind name ("milk", "sugar", ...).
    pub fn kind_name(&self) -> &'static str {
        match self {
            AddOn::Milk(_) => MilkKind::KIND,
            AddOn::Sugar { .. } => SugarKind::KIND,
            AddOn::Flavor { .. } => FlavorKind::KIND,
            AddOn::Syrup { .. } => SyrupKind::KIND,
            AddOn::ExtraShot { .. } => ShotKind::KIND,
            AddOn::WhippedCream { .. } => CreamKind::KIND,
        }
    }

    /// The selected catalog entry.
    pub fn entry(&self) -> &'static CatalogEntry {
        match self {
            AddOn::Milk(kind) => kind.entry(),
            AddOn::Sugar { kind, .. } => kind.entry(),
            AddOn::Flavor { kind, .. } => kind.entry(),
            AddOn::Syrup { kind, .. } => kind.entry(),
            AddOn::ExtraShot { kind, .. } => kind.entry(),
            AddOn::WhippedCream { kind, .. } => kind.entry(),
        }
    }

    pub fn cost(&self) -> f64 {
        let unit = self.entry();
        match *self {
            AddOn::Milk(_) => unit.cost,
            AddOn::Sugar { packets, .. } => packets as f64 * unit.cost,
            AddOn::Flavor { intensity, .. } => unit.cost * intensity,
            AddOn::Syrup { pumps, .. } => pumps as f64 * unit.cost,
            AddOn::ExtraShot { shots, .. } => shots as f64 * unit.cost,
            AddOn::WhippedCream { amount, .. } => unit.cost * amount,
        }
    }

    pub fn calories(&self) -> u32 {
        let unit = self.entry();
        match *self {
            AddOn::Milk(_) => unit.calories,
            AddOn::Sugar { packets, .. } => packets.saturating_mul(unit.calories),
            AddOn::Flavor { intensity, .. } => (unit.calories as f64 * intensity).floor() as u32,
            AddOn::Syrup { pumps, .. } => pumps * unit.calories,
            AddOn::ExtraShot { shots, .. } => shots * unit.calories,
            AddOn::WhippedCream { amount, .. } => (unit.calories as f64 * amount).floor() as u32,
        }
    }

    pub fn prep_minutes(&self) -> u32 {
        let unit = self.entry();
        match *self {
            AddOn::Sugar { packets: 0, .. } => 0,
            AddOn::ExtraShot { shots, .. } => shots * unit.prep_minutes,
            _ => unit.prep_minutes,
        }
    }

    /// Text appended to the inner description, or `None` when the add-on
    /// contributes nothing visible (sugar with zero packets).
    pub fn description_fragment(&self) -> Option<String> {
        let name = self.entry().name;
        match *self {
            AddOn::Milk(_) => Some(format!("{} Milk", name)),
            AddOn::Sugar { packets: 0, .. } => None,
            AddOn::Sugar { packets, .. } => Some(format!("{} x{}", name, packets)),
            AddOn::Flavor { intensity, .. } => {
                let qualifier = if intensity <= MIN_INTENSITY {
                    "Light "
                } else if intensity >= MAX_INTENSITY {
                    "Extra "
                } else if intensity >= STRONG_INTENSITY {
                    "Strong "
                } else {
                    ""
                };
                Some(format!("{}{} Flavor", qualifier, name))
            }
            AddOn::Syrup { pumps, .. } => {
                let unit = if pumps == 1 { "pump" } else { "pumps" };
                Some(format!("{} Syrup ({} {})", name, pumps, unit))
            }
            AddOn::ExtraShot { shots, .. } => {
                let qualifier = match shots {
                    1 => "Extra",
                    2 => "Double",
                    3 => "Triple",
                    _ => "Quad",
                };
                Some(format!("{} {} Shot", qualifier, name))
            }
            AddOn::WhippedCream { amount, .. } => {
                let qualifier = if amount <= MIN_INTENSITY {
                    "Light "
                } else if amount >= MAX_INTENSITY {
                    "Double "
                } else if amount >= STRONG_INTENSITY {
                    "Extra "
                } else {
                    ""
                };
                Some(format!("{}{} Whipped Cream", qualifier, name))
            }
        }
    }

    /// Ingredient line for receipts, or `None` for a zero-quantity add-on.
    pub fn ingredient(&self) -> Option<String> {
        let name = self.entry().name;
        match *self {
            AddOn::Milk(_) => Some(format!("{} milk", name)),
            AddOn::Sugar { packets: 0, .. } => None,
            AddOn::Sugar { packets, .. } => Some(format!("{} ({} packets)", name, packets)),
            AddOn::Flavor { .. } => Some(format!("{} flavoring", name)),
            AddOn::Syrup { pumps, .. } => Some(format!("{} syrup ({} pumps)", name, pumps)),
            AddOn::ExtraShot { shots, .. } => Some(format!("{} espresso shot x{}", name, shots)),
            AddOn::WhippedCream { .. } => Some(format!("{} whipped cream", name)),
        }
    }
}

/// A beverage wrapped with one add-on.
///
/// Every attribute is the inner value plus this add-on's contribution; size
/// and availability pass straight through.
#[derive(Debug)]
pub struct Attachment {
    inner: Box<dyn Beverage>,
    add_on: AddOn,
}

impl Attachment {
    pub fn new(inner: Box<dyn Beverage>, add_on: AddOn) -> Self {
        let add_on = add_on.normalized();
        debug!(
            "wrapping '{}' with {} {}",
            inner.description(),
            add_on.kind_name(),
            add_on.entry().name
        );
        Self { inner, add_on }
    }

    pub fn boxed(inner: Box<dyn Beverage>, add_on: AddOn) -> Box<dyn Beverage> {
        Box::new(Self::new(inner, add_on))
    }

    pub fn add_on(&self) -> &AddOn {
        &self.add_on
    }

    pub fn inner(&self) -> &dyn Beverage {
        self.inner.as_ref()
    }

    /// Unwrap one layer, returning the inner beverage.
    pub fn into_inner(self) -> Box<dyn Beverage> {
        self.inner
    }
}

impl Beverage for Attachment {
    fn description(&self) -> String {
        let inner = self.inner.description();
        match self.add_on.description_fragment() {
            Some(fragment) => format!("{}, {}", inner, fragment),
            None => inner,
        }
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + self.add_on.cost()
    }

    fn size(&self) -> Size {
        self.inner.size()
    }

    fn set_size(&mut self, size: Size) {
        self.inner.set_size(size);
    }

    fn ingredients(&self) -> Vec<String> {
        let mut ingredients = self.inner.ingredients();
        ingredients.extend(self.add_on.ingredient());
        ingredients
    }

    fn preparation_time(&self) -> u32 {
        self.inner
            .preparation_time()
            .saturating_add(self.add_on.prep_minutes())
    }

    fn calories(&self) -> u32 {
        self.inner.calories().saturating_add(self.add_on.calories())
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}

/// Fluent wrapping for boxed beverages.
pub trait BeverageExt {
    fn with(self, add_on: AddOn) -> Box<dyn Beverage>;
}

impl BeverageExt for Box<dyn Beverage> {
    fn with(self, add_on: AddOn) -> Box<dyn Beverage> {
        Attachment::boxed(self, add_on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::beverage::BaseDrink;

    fn coffee() -> Box<dyn Beverage> {
        BaseDrink::plain_coffee(Size::Medium).boxed()
    }

    #[test]
    fn test_milk_contribution() {
        let drink = coffee().with(AddOn::milk(MilkKind::Almond));
        assert!((drink.cost() - 3.75).abs() < 0.001);
        assert_eq!(drink.calories(), 20);
        assert_eq!(drink.preparation_time(), 4);
        assert_eq!(drink.description(), "Medium Plain Coffee, Almond Milk");
    }

    #[test]
    fn test_zero_sugar_is_invisible() {
        let drink = coffee().with(AddOn::sugar(SugarKind::White, 0));
        assert_eq!(drink.description(), "Medium Plain Coffee");
        assert_eq!(drink.ingredients().len(), 2);
        assert_eq!(drink.preparation_time(), 3);
        assert!((drink.cost() - 3.00).abs() < 0.001);
    }

    #[test]
    fn test_negative_sugar_clamps_to_zero() {
        assert_eq!(
            AddOn::sugar(SugarKind::Honey, -3),
            AddOn::Sugar { kind: SugarKind::Honey, packets: 0 }
        );
    }

    #[test]
    fn test_huge_sugar_saturates_calories() {
        let drink = coffee().with(AddOn::sugar(SugarKind::Honey, 1_000_000_000));
        assert_eq!(drink.calories(), u32::MAX);
        assert_eq!(drink.preparation_time(), 4);

        let drink = drink.with(AddOn::milk(MilkKind::Whole));
        assert_eq!(drink.calories(), u32::MAX);
    }

    #[test]
    fn test_syrup_pumps_clamp() {
        assert_eq!(
            AddOn::syrup(SyrupKind::Maple, 10),
            AddOn::Syrup { kind: SyrupKind::Maple, pumps: 6 }
        );
        assert_eq!(
            AddOn::syrup(SyrupKind::Maple, 0),
            AddOn::Syrup { kind: SyrupKind::Maple, pumps: 1 }
        );
    }

    #[test]
    fn test_shots_clamp() {
        assert_eq!(
            AddOn::extra_shot(ShotKind::Regular, 9),
            AddOn::ExtraShot { kind: ShotKind::Regular, shots: 4 }
        );
        assert_eq!(
            AddOn::extra_shot(ShotKind::Regular, -1),
            AddOn::ExtraShot { kind: ShotKind::Regular, shots: 1 }
        );
    }

    #[test]
    fn test_intensity_clamp() {
        assert_eq!(
            AddOn::flavor(FlavorKind::Mocha, 3.0),
            AddOn::Flavor { kind: FlavorKind::Mocha, intensity: 2.0 }
        );
        assert_eq!(
            AddOn::whipped_cream(CreamKind::Classic, 0.1),
            AddOn::WhippedCream { kind: CreamKind::Classic, amount: 0.5 }
        );
        assert_eq!(
            AddOn::flavor(FlavorKind::Mocha, f64::NAN),
            AddOn::Flavor { kind: FlavorKind::Mocha, intensity: 1.0 }
        );
    }

    #[test]
    fn test_attachment_normalizes_direct_values() {
        let raw = AddOn::Syrup { kind: SyrupKind::Simple, pumps: 40 };
        let attachment = Attachment::new(coffee(), raw);
        assert_eq!(
            *attachment.add_on(),
            AddOn::Syrup { kind: SyrupKind::Simple, pumps: 6 }
        );
    }

    #[test]
    fn test_flavor_calories_floor() {
        let add_on = AddOn::flavor(FlavorKind::Vanilla, 1.5);
        assert_eq!(add_on.calories(), 22);
        assert!((add_on.cost() - 0.90).abs() < 0.001);
        assert_eq!(add_on.prep_minutes(), 1);
    }

    #[test]
    fn test_description_qualifiers() {
        let light = AddOn::flavor(FlavorKind::Caramel, 0.5);
        let strong = AddOn::flavor(FlavorKind::Caramel, 1.5);
        let extra = AddOn::flavor(FlavorKind::Caramel, 2.0);
        let plain = AddOn::flavor(FlavorKind::Caramel, 1.0);
        assert_eq!(light.description_fragment().unwrap(), "Light Caramel Flavor");
        assert_eq!(strong.description_fragment().unwrap(), "Strong Caramel Flavor");
        assert_eq!(extra.description_fragment().unwrap(), "Extra Caramel Flavor");
        assert_eq!(plain.description_fragment().unwrap(), "Caramel Flavor");

        let double_cream = AddOn::whipped_cream(CreamKind::Vanilla, 2.0);
        assert_eq!(
            double_cream.description_fragment().unwrap(),
            "Double Vanilla Whipped Cream"
        );

        let shot = AddOn::extra_shot(ShotKind::Lungo, 3);
        assert_eq!(shot.description_fragment().unwrap(), "Triple Lungo Shot");

        let syrup = AddOn::syrup(SyrupKind::Lavender, 1);
        assert_eq!(syrup.description_fragment().unwrap(), "Lavender Syrup (1 pump)");
    }

    #[test]
    fn test_set_size_passes_through_chain() {
        let mut drink = coffee()
            .with(AddOn::milk(MilkKind::Oat))
            .with(AddOn::syrup(SyrupKind::Vanilla, 2));
        let before = drink.cost();

        drink.set_size(Size::Large);
        assert_eq!(drink.size(), Size::Large);
        assert!((drink.cost() - before - 0.50).abs() < 0.001);
    }

    #[test]
    fn test_availability_passes_through() {
        let mut base = BaseDrink::espresso(Size::Small);
        base.set_available(false);
        let drink = base.boxed().with(AddOn::milk(MilkKind::Whole));
        assert!(!drink.is_available());
    }

    #[test]
    fn test_into_inner_unwraps_one_layer() {
        let attachment = Attachment::new(coffee(), AddOn::milk(MilkKind::Soy));
        assert_eq!(attachment.inner().description(), "Medium Plain Coffee");
        let inner = attachment.into_inner();
        assert!((inner.cost() - 3.00).abs() < 0.001);
    }
}
