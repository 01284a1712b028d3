//! Tests for cancellation tokens and checkpoints

#[cfg(test)]
mod tests {
    use tilelayers::GenerationError;
    use tilelayers::algorithm::cancellation::{CancellationToken, Checkpoint};

    // Tests that every clone observes cancellation
    // Verified by giving clones independent flags
    #[test]
    fn test_token_clones_share_state() {
        let token = CancellationToken::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());

        token.cancel();

        assert!(token.is_cancelled());
        assert!(observer.is_cancelled());
    }

    // Tests checkpoint results before and after cancellation
    // Verified by inverting the cancelled check
    #[test]
    fn test_checkpoint_reports_layer_once_cancelled() {
        let token = CancellationToken::new();
        let checkpoint = Checkpoint::new(3, Some(&token));

        assert_eq!(checkpoint.check(), Ok(()));
        token.cancel();
        assert_eq!(
            checkpoint.check(),
            Err(GenerationError::Cancelled { layer: 3 })
        );
        assert_eq!(checkpoint.layer(), 3);
    }

    // Tests that a detached checkpoint never aborts
    // Verified by treating a missing token as cancelled
    #[test]
    fn test_detached_checkpoint_never_fails() {
        let checkpoint = Checkpoint::detached(1);

        assert!(checkpoint.check().is_ok());
        assert_eq!(checkpoint.layer(), 1);
    }
}
