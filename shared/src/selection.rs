use crate::model::{Base, Building, Recipe};

/// Planet → base → building drill-down on the HQ page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub planet: Option<String>,
    pub base: Option<String>,
    pub building: Option<String>,
}

impl Selection {
    pub fn select_planet(&mut self, planet_id: &str) {
        if self.planet.as_deref() == Some(planet_id) {
            return;
        }
        self.planet = Some(planet_id.to_string());
        self.base = None;
        self.building = None;
    }

    pub fn select_base(&mut self, base_id: &str) {
        if self.base.as_deref() == Some(base_id) {
            return;
        }
        self.base = Some(base_id.to_string());
        self.building = None;
    }

    pub fn select_building(&mut self, building_id: &str) {
        self.building = Some(building_id.to_string());
    }

    /// Drop selections whose target is gone after a refresh.
    pub fn retain_bases(&mut self, bases: &[Base]) {
        if let Some(id) = &self.base
            && !bases.iter().any(|base| &base.id == id)
        {
            self.base = None;
            self.building = None;
        }
    }

    pub fn retain_buildings(&mut self, buildings: &[Building]) {
        if let Some(id) = &self.building
            && !buildings.iter().any(|building| &building.id == id)
        {
            self.building = None;
        }
    }
}

pub fn bases_on_planet(bases: &[Base], planet_id: Option<&str>) -> Vec<Base> {
    bases
        .iter()
        .filter(|base| planet_id.is_none_or(|id| base.planet.id == id))
        .cloned()
        .collect()
}

pub fn buildings_in_base(buildings: &[Building], base_id: Option<&str>) -> Vec<Building> {
    buildings
        .iter()
        .filter(|building| base_id.is_none_or(|id| building.base.id == id))
        .cloned()
        .collect()
}

/// Recipes a building can fabricate: those scoped to its catalog item.
pub fn recipes_for(recipes: &[Recipe], building: &Building) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|recipe| recipe.catalog.id == building.catalog.id)
        .cloned()
        .collect()
}
