//! # CRF — Conditional Random Field Linear-Chain
//!
//! Score de uma sequência de tags `y` para os tokens `x`:
//!
//! ```text
//! score(y, x) = Σ_i [emission(y_i, x, i) + transition(y_{i-1}, y_i)]
//! ```
//!
//! Os pesos de emissão ficam numa linha por feature (um peso por tag); a
//! matriz de transição é `Tag::COUNT × Tag::COUNT`. Os pesos dos modelos
//! embutidos são heurísticos (ver [`crate::model`]).

use std::collections::HashMap;

use crate::features::FeatureVector;
use crate::tagger::Tag;

type Row = [f64; Tag::COUNT];

/// Pesos de um CRF linear-chain
#[derive(Debug, Clone)]
pub struct CrfModel {
    /// feature → peso por tag (indexado por [`Tag::index`])
    emission_weights: HashMap<String, Row>,
    /// `[prev][next]`
    transition_weights: [Row; Tag::COUNT],
}

impl CrfModel {
    /// Modelo com todos os pesos zerados
    pub fn new() -> Self {
        Self {
            emission_weights: HashMap::new(),
            transition_weights: [[0.0; Tag::COUNT]; Tag::COUNT],
        }
    }

    pub fn set_emission(&mut self, feature: &str, tag: &Tag, weight: f64) {
        self.emission_weights
            .entry(feature.to_string())
            .or_insert([0.0; Tag::COUNT])[tag.index()] = weight;
    }

    pub fn set_transition(&mut self, from: &Tag, to: &Tag, weight: f64) {
        self.transition_weights[from.index()][to.index()] = weight;
    }

    /// Aplica `penalty` a todas as transições inválidas no esquema BIO
    pub fn penalize_invalid_transitions(&mut self, penalty: f64) {
        for prev in Tag::all() {
            for next in Tag::all() {
                if !Tag::is_valid_transition(&prev, &next) {
                    self.set_transition(&prev, &next, penalty);
                }
            }
        }
    }

    /// `Σ_k w_{k, tag} * f_k(x, i)`
    pub fn emission_score(&self, features: &FeatureVector, tag: &Tag) -> f64 {
        self.emission_row(features)[tag.index()]
    }

    /// Scores de emissão de todas as tags de uma vez
    pub fn emission_row(&self, features: &FeatureVector) -> Row {
        let mut row = [0.0; Tag::COUNT];
        for (name, value) in &features.features {
            if let Some(weights) = self.emission_weights.get(name) {
                for (acc, w) in row.iter_mut().zip(weights) {
                    *acc += value * w;
                }
            }
        }
        row
    }

    pub fn transition_score(&self, prev: &Tag, next: &Tag) -> f64 {
        self.transition_weights[prev.index()][next.index()]
    }

    /// Número de features com pesos definidos
    pub fn feature_count(&self) -> usize {
        self.emission_weights.len()
    }
}

impl Default for CrfModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::EntityCategory;

    #[test]
    fn test_emission_score_sums_active_features() {
        let mut model = CrfModel::new();
        let b_per = Tag::Begin(EntityCategory::Per);
        model.set_emission("is_capitalized", &b_per, 2.5);
        model.set_emission("in_person_gazetteer", &b_per, 1.0);

        let mut fv = FeatureVector::new();
        fv.insert("is_capitalized", 1.0);
        fv.insert("in_person_gazetteer", 1.0);
        fv.insert("unknown_feature", 1.0);

        assert!((model.emission_score(&fv, &b_per) - 3.5).abs() < 1e-9);
        assert_eq!(model.emission_score(&fv, &Tag::Outside), 0.0);
    }

    #[test]
    fn test_invalid_transitions_are_penalized() {
        let mut model = CrfModel::new();
        let b_per = Tag::Begin(EntityCategory::Per);
        let i_per = Tag::Inside(EntityCategory::Per);
        model.set_transition(&b_per, &i_per, 3.0);
        model.penalize_invalid_transitions(-10.0);

        assert_eq!(model.transition_score(&b_per, &i_per), 3.0);
        assert_eq!(model.transition_score(&Tag::Outside, &i_per), -10.0);
        assert_eq!(model.transition_score(&Tag::Outside, &b_per), 0.0);
    }
}
