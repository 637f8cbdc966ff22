use crate::domain::model::{Animal, Bird, Elephant, Lion};

/// The five animals the zoo opens with, in admission order.
pub fn founding_animals() -> Vec<Animal> {
    vec![
        Lion::new("Simba", 5, 30).into(),
        Elephant::new("Dumbo", 10, 2.5).into(),
        Bird::new("Tweety", 2, 15.0, true).into(),
        Bird::new("Pengu", 3, 10.0, false).into(),
        Lion::new("Nala", 4, 25).into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Species;
    use crate::domain::ports::Creature;

    #[test]
    fn test_founding_animals() {
        let animals = founding_animals();
        let summary: Vec<(&str, u32, Species)> = animals
            .iter()
            .map(|a| (a.name(), a.age(), a.species()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Simba", 5, Species::Lion),
                ("Dumbo", 10, Species::Elephant),
                ("Tweety", 2, Species::Bird),
                ("Pengu", 3, Species::Bird),
                ("Nala", 4, Species::Lion),
            ]
        );
    }
}
