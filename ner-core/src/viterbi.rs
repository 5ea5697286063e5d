//! # Algoritmo de Viterbi — Decodificação de Sequências CRF
//!
//! Programação dinâmica que encontra a sequência de tags de maior score em
//! `O(N × T²)` em vez de `O(T^N)`:
//!
//! ```text
//! Inicialização: best[0][t] = emission(t, x_0)      (I-X no início é penalizado)
//! Recursão:      best[i][t] = max_{t'} [best[i-1][t'] + transition(t', t)] + emission(t, x_i)
//! Backtracking:  segue os backpointers a partir da melhor tag final
//! ```

use crate::crf::CrfModel;
use crate::features::FeatureVector;
use crate::tagger::Tag;

/// Penalidade para uma sequência que começa com `I-X`
const INSIDE_AT_START_PENALTY: f64 = -10.0;

/// Melhor sequência de tags e seu score (não normalizado)
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub tags: Vec<Tag>,
    pub score: f64,
}

/// Decodifica a sequência de tags mais provável para os vetores de features.
pub fn viterbi_decode(model: &CrfModel, feature_vectors: &[FeatureVector]) -> Decoded {
    let Some(first) = feature_vectors.first() else {
        return Decoded {
            tags: vec![],
            score: 0.0,
        };
    };

    let tags = Tag::all();
    let mut best = model.emission_row(first);
    for (t, tag) in tags.iter().enumerate() {
        if matches!(tag, Tag::Inside(_)) {
            best[t] += INSIDE_AT_START_PENALTY;
        }
    }

    let mut backptr: Vec<[usize; Tag::COUNT]> = Vec::with_capacity(feature_vectors.len());
    for fv in &feature_vectors[1..] {
        let emission = model.emission_row(fv);
        let mut next = [f64::NEG_INFINITY; Tag::COUNT];
        let mut pointers = [0usize; Tag::COUNT];

        for (t, tag) in tags.iter().enumerate() {
            let (prev, score) = tags
                .iter()
                .enumerate()
                .map(|(p, prev)| (p, best[p] + model.transition_score(prev, tag)))
                .fold((0, f64::NEG_INFINITY), |acc, cand| if cand.1 > acc.1 { cand } else { acc });
            next[t] = score + emission[t];
            pointers[t] = prev;
        }

        backptr.push(pointers);
        best = next;
    }

    let (mut current, score) = argmax(&best);
    let mut path = vec![tags[current]];
    for pointers in backptr.iter().rev() {
        current = pointers[current];
        path.push(tags[current]);
    }
    path.reverse();

    Decoded { tags: path, score }
}

fn argmax(scores: &[f64]) -> (usize, f64) {
    scores
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |acc, cand| if cand.1 > acc.1 { cand } else { acc })
}
