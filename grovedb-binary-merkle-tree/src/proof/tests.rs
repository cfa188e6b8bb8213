#[cfg(test)]
mod proof_tests {
    use assert_matches::assert_matches;

    use crate::{HashAlgorithm, NodeEncoding, proof::*, tree::MerkleTree};

    fn sample_tree() -> MerkleTree {
        MerkleTree::build(["a", "b", "c", "d", "e"])
    }

    // ── Text form ────────────────────────────────────────────────────────

    #[test]
    fn test_display_one_line_per_step() {
        let tree = sample_tree();
        let proof = tree.prove(4).expect("prove leaf 4");
        let text = proof.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), tree.height());
        for (line, step) in lines.iter().zip(proof.steps()) {
            assert_eq!(*line, format!("{} {}", step.side.marker(), step.sibling.to_hex()));
        }
    }

    #[test]
    fn test_text_round_trip() {
        let tree = sample_tree();
        for index in 0..tree.leaf_count() {
            let proof = tree.prove(index).expect("prove");
            let parsed = MerkleProof::parse_text(tree.scheme(), index as u64, &proof.to_string())
                .expect("parse proof text");
            assert_eq!(parsed, proof);
        }
    }

    #[test]
    fn test_hex_steps_round_trip() {
        let tree = sample_tree();
        let proof = tree.prove(1).expect("prove leaf 1");
        let steps = proof.to_hex_steps();
        assert!(steps.iter().all(|(side, _)| *side == 'L' || *side == 'R'));
        let rebuilt = MerkleProof::from_hex_steps(
            proof.scheme(),
            proof.leaf_index(),
            steps.iter().map(|(side, hex)| (side.to_string(), hex.clone())),
        )
        .expect("rebuild from hex steps");
        assert_eq!(rebuilt, proof);
    }

    #[test]
    fn test_parse_text_ignores_blank_lines() {
        let proof = sample_tree().prove(0).expect("prove leaf 0");
        let text = format!("\n{}\n\n", proof);
        let parsed = MerkleProof::parse_text(proof.scheme(), 0, &text).expect("parse");
        assert_eq!(parsed, proof);
    }

    #[test]
    fn test_parse_text_rejects_bad_lines() {
        let scheme = HashScheme::default();
        let digest = "00".repeat(32);

        assert_matches!(
            MerkleProof::parse_text(scheme, 0, &format!("X {}", digest)),
            Err(MerkleError::InvalidProof(_))
        );
        assert_matches!(
            MerkleProof::parse_text(scheme, 0, "L"),
            Err(MerkleError::InvalidProof(_))
        );
        assert_matches!(
            MerkleProof::parse_text(scheme, 0, &format!("L {} extra", digest)),
            Err(MerkleError::InvalidProof(_))
        );
        assert_matches!(
            MerkleProof::parse_text(scheme, 0, "R not-a-digest"),
            Err(MerkleError::InvalidDigest(_))
        );
    }

    #[test]
    fn test_side_markers() {
        assert_eq!(ProofSide::Left.marker(), 'L');
        assert_eq!(ProofSide::Right.marker(), 'R');
        assert_eq!("L".parse::<ProofSide>(), Ok(ProofSide::Left));
        assert_eq!("R".parse::<ProofSide>(), Ok(ProofSide::Right));
        assert_matches!("left".parse::<ProofSide>(), Err(MerkleError::InvalidProof(_)));
    }

    #[test]
    fn test_empty_text_is_empty_proof() {
        let proof = MerkleProof::parse_text(HashScheme::default(), 0, "").expect("parse");
        assert!(proof.is_empty());
        assert_eq!(proof.to_string(), "");
    }

    // ── Binary encoding ──────────────────────────────────────────────────

    #[test]
    fn test_encode_decode_preserves_scheme_and_index() {
        let scheme = HashScheme::new(HashAlgorithm::Blake3, NodeEncoding::Hex);
        let tree = MerkleTree::build_with_scheme(["x", "y", "z"], scheme);
        let proof = tree.prove(2).expect("prove leaf 2");

        let bytes = proof.encode_to_vec().expect("encode");
        let decoded = MerkleProof::decode_from_slice(&bytes).expect("decode");
        assert_eq!(decoded, proof);
        assert_eq!(decoded.scheme(), scheme);
        assert_eq!(decoded.leaf_index(), 2);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_matches!(
            MerkleProof::decode_from_slice(&[]),
            Err(MerkleError::InvalidProof(_))
        );
        assert_matches!(
            MerkleProof::decode_from_slice(&[0xff; 7]),
            Err(MerkleError::InvalidProof(_))
        );
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let proof = sample_tree().prove(3).expect("prove leaf 3");
        let mut bytes = proof.encode_to_vec().expect("encode");
        bytes.push(0);
        assert_matches!(
            MerkleProof::decode_from_slice(&bytes),
            Err(MerkleError::InvalidProof(_))
        );
    }

    #[test]
    fn test_decode_rejects_too_many_steps() {
        let step = ProofStep::new(ProofSide::Left, crate::Digest::new([7u8; 32]));
        let proof = MerkleProof::new(HashScheme::default(), 0, vec![step; MAX_PROOF_STEPS + 1]);
        let bytes = proof.encode_to_vec().expect("encode");
        assert_matches!(
            MerkleProof::decode_from_slice(&bytes),
            Err(MerkleError::InvalidProof(_))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json_uses_hex_digests() {
        let proof = sample_tree().prove(0).expect("prove leaf 0");
        let json = serde_json::to_string(&proof).expect("serialize");
        assert!(json.contains(&proof.steps()[0].sibling.to_hex()));
        let back: MerkleProof = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, proof);
    }
}
