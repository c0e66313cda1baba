use crate::registry::Registry;
use crate::tunable::Tunable;

/// Builds the engine's declared tunable set with default values, in the
/// order advertised to the controller.
///
/// Negative divisors mark thresholds that are negative inside the search
/// but tuned as positive magnitudes.
pub fn defaults() -> Vec<Tunable> {
    vec![
        // Aspiration windows
        Tunable::new("ASP_BaseDelta", 20, 1.0).with_max(40).with_step(2),
        Tunable::new("ASP_DeltaMultiplier", 18, 10.0).with_max(36).with_step(2),
        Tunable::new("ASP_DepthCondition", 4, 1.0).with_max(8).with_step(1),
        // Reverse futility pruning
        Tunable::new("RFP_DepthCondition", 11, 1.0).with_max(22).with_step(1),
        Tunable::new("RFP_Multiplier", 84, 1.0).with_max(168).with_step(8),
        // Internal iterative reductions
        Tunable::new("IIR_DepthCondition", 5, 1.0).with_max(10).with_step(1),
        // Futility pruning
        Tunable::new("FP_DepthCondition", 3, 1.0).with_max(6).with_step(1),
        Tunable::new("FP_Base", 278, 1.0).with_max(556).with_step(28),
        Tunable::new("FP_Multiplier", 67, 1.0).with_max(134).with_step(7),
        // Late move pruning
        Tunable::new("LMP_DepthCondition", 8, 1.0).with_max(16).with_step(1),
        Tunable::new("LMP_Base", 0, 1.0).with_max(8).with_step(1),
        // Static exchange pruning
        Tunable::new("SPR_DepthCondition", 3, 1.0).with_max(6).with_step(1),
        Tunable::new("SPR_CaptureThreshold", 108, -1.0).with_max(216).with_step(11),
        Tunable::new("SPR_QuietThreshold", 32, -1.0).with_max(64).with_step(3),
        // Null move pruning
        Tunable::new("NMP_Divisor", 196, 1.0).with_max(392).with_step(20),
        Tunable::new("NMP_Subtractor", 3, 1.0).with_max(6).with_step(1),
        Tunable::new("NMP_DepthCondition", 2, 1.0).with_max(4).with_step(1),
        // History and continuation reduction scales
        Tunable::new("HMR_Divisor", 8074, 1.0).with_max(16148).with_step(807),
        Tunable::new("CMR_Divisor", 3000, 1.0).with_max(6000).with_step(300),
        // Late move reductions; these two feed the reduction table
        Tunable::new("LMR_Base", 80, 100.0).with_max(160).with_step(8),
        Tunable::new("LMR_Multiplier", 56, 100.0).with_max(112).with_step(6),
        // History bonus formula
        Tunable::new("HST_MaxBonus", 1892, 1.0).with_max(3784).with_step(189),
        Tunable::new("HST_Multiplier", 4, 1.0).with_max(8).with_step(1),
        Tunable::new("HST_Adder", 121, 1.0).with_max(242).with_step(12),
        Tunable::new("HST_Subtractor", 120, 1.0).with_max(240).with_step(12),
        // Singular extensions
        Tunable::new("SIN_DepthCondition", 8, 1.0).with_max(16).with_step(1),
        Tunable::new("SIN_DepthMargin", 3, 1.0).with_max(6).with_step(1),
        Tunable::new("SIN_DepthScale", 24, 1.0).with_max(48).with_step(2),
        // Razoring
        Tunable::new("RAZ_DepthMultiplier", 395, 1.0).with_max(790).with_step(40),
        // Node time management
        Tunable::new("NTM_DepthCondition", 8, 1.0).with_max(16).with_step(1),
        Tunable::new("NTM_Subtractor", 153, 100.0).with_max(306).with_step(15),
        Tunable::new("NTM_Multiplier", 139, 100.0).with_max(278).with_step(14),
        Tunable::new("NTM_Default", 98, 100.0).with_max(196).with_step(10),
        // History pruning
        Tunable::new("HIP_DepthCondition", 4, 1.0).with_max(8).with_step(1),
        Tunable::new("HIP_DepthMultiplier", 1536, -1.0).with_max(3072).with_step(154),
    ]
}

/// Builds a registry over `defaults()` with the reduction-formula pair
/// wired to <recompute>, the routine that rebuilds the reduction table
/// whenever either coefficient changes.
pub fn default_registry(recompute: impl FnMut() + 'static) -> Registry {
    let mut registry = Registry::new(defaults());
    registry.on_change(vec!["LMR_Base", "LMR_Multiplier"], recompute);
    registry
}
