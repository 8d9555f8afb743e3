use tvilling::domain::Embedding;

#[test]
fn given_embedding_when_checking_dimensions_then_returns_correct_size() {
    let embedding = Embedding::new(vec![0.1, 0.2, 0.3]);
    assert_eq!(embedding.dimensions(), 3);
}

#[test]
fn given_identical_vectors_when_computing_similarity_then_returns_one() {
    let a = Embedding::new(vec![1.0, 2.0, 3.0]);
    let b = Embedding::new(vec![1.0, 2.0, 3.0]);
    assert!((a.cosine_similarity(&b) - 1.0).abs() < 0.001);
}

#[test]
fn given_orthogonal_vectors_when_computing_similarity_then_returns_zero() {
    let a = Embedding::new(vec![1.0, 0.0, 0.0]);
    let b = Embedding::new(vec![0.0, 1.0, 0.0]);
    assert!(a.cosine_similarity(&b).abs() < 0.001);
}

#[test]
fn given_mismatched_dimensions_when_computing_similarity_then_returns_zero() {
    let a = Embedding::new(vec![1.0, 0.0]);
    let b = Embedding::new(vec![1.0, 0.0, 0.0]);
    assert_eq!(a.cosine_similarity(&b), 0.0);
}

#[test]
fn given_zero_vector_when_computing_similarity_then_returns_zero() {
    let a = Embedding::new(vec![0.0, 0.0]);
    let b = Embedding::new(vec![1.0, 1.0]);
    assert_eq!(a.cosine_similarity(&b), 0.0);
}

#[test]
fn given_vector_when_normalizing_then_has_unit_length() {
    let normalized = Embedding::new(vec![3.0, 4.0]).normalized();
    assert!((normalized.magnitude() - 1.0).abs() < 0.001);
    assert!((normalized.values[0] - 0.6).abs() < 0.001);
}

#[test]
fn given_zero_vector_when_normalizing_then_unchanged() {
    let normalized = Embedding::new(vec![0.0, 0.0]).normalized();
    assert_eq!(normalized.values, vec![0.0, 0.0]);
}
