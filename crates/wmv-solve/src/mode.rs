use wmv_relations::PpoVariant;

/// Selects the ppo variant and release-acquire treatment for a `verify`
/// call, independent of any individual event's own `mode` tag.
///
/// spec.md §6 leaves the exact semantics of `analyze(trace_builder, mode)`
/// an open question ("do not guess which interpretation demo scenarios
/// depend on; parameterize if needed" — §9). The interpretation fixed
/// here, recorded in DESIGN.md:
///
/// - [`Mode::Sc`] and [`Mode::Ra`] both use the full program-order ppo
///   ([`PpoVariant::Sc`]) for `Sc`, and the sc-tag-gated ppo
///   ([`PpoVariant::Relaxed`]) for `Ra`; the release-acquire axiom block
///   is included for both.
/// - [`Mode::Relaxed`] uses [`PpoVariant::Relaxed`] and omits the
///   release-acquire axiom block entirely, even for events individually
///   tagged `rel`/`acq` — under this mode they degrade to plain rf/co
///   well-formedness, matching spec.md §4.4's "Relaxed: no additional
///   axioms".
///
/// Per-event SC axioms (total order, latest-visible) are unaffected by
/// this choice: they fire for any event tagged `sc` regardless of `Mode`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Sc,
    Ra,
    Relaxed,
}

impl Mode {
    #[must_use]
    pub fn ppo_variant(self) -> PpoVariant {
        match self {
            Mode::Sc => PpoVariant::Sc,
            Mode::Ra | Mode::Relaxed => PpoVariant::Relaxed,
        }
    }

    #[must_use]
    pub fn ra_enabled(self) -> bool {
        !matches!(self, Mode::Relaxed)
    }
}
