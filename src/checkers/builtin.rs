//! Built-in logger checker definitions.
//!
//! Three families ship by default: logr (the structured logging interface),
//! klog (Kubernetes leveled logging), and zap (the sugared logger).
//! Constructors and accessors that return a logger (`FromContext`,
//! `NewKlogr`, `S`, `L`) are registered for table completeness; they never
//! produce findings because their signatures are not key-value variadics.

use once_cell::sync::Lazy;

use super::LoggerChecker;

/// The built-in definition table, constructed once at first use.
pub(crate) static BUILTIN_CHECKERS: Lazy<Vec<LoggerChecker>> = Lazy::new(|| {
    vec![
        LoggerChecker::new(
            "logr",
            "github.com/go-logr/logr",
            &[
                "(github.com/go-logr/logr.Logger).Error",
                "(github.com/go-logr/logr.Logger).Info",
                "(github.com/go-logr/logr.Logger).WithValues",
                "github.com/go-logr/logr.FromContext",
                "github.com/go-logr/logr.FromContextOrDiscard",
            ],
        ),
        LoggerChecker::new(
            "klog",
            "k8s.io/klog/v2",
            &[
                "k8s.io/klog/v2.InfoS",
                "k8s.io/klog/v2.InfoSDepth",
                "k8s.io/klog/v2.ErrorS",
                "(k8s.io/klog/v2.Verbose).InfoS",
                "(k8s.io/klog/v2.Verbose).InfoSDepth",
                "(k8s.io/klog/v2.Verbose).ErrorS",
                "k8s.io/klog/v2.NewKlogr",
            ],
        ),
        LoggerChecker::new(
            "zap",
            "go.uber.org/zap",
            &[
                "(*go.uber.org/zap.SugaredLogger).With",
                "(*go.uber.org/zap.SugaredLogger).Debugw",
                "(*go.uber.org/zap.SugaredLogger).Infow",
                "(*go.uber.org/zap.SugaredLogger).Warnw",
                "(*go.uber.org/zap.SugaredLogger).Errorw",
                "(*go.uber.org/zap.SugaredLogger).DPanicw",
                "(*go.uber.org/zap.SugaredLogger).Panicw",
                "(*go.uber.org/zap.SugaredLogger).Fatalw",
                "(go.uber.org/zap.SugaredLogger).With",
                "(go.uber.org/zap.SugaredLogger).Debugw",
                "(go.uber.org/zap.SugaredLogger).Infow",
                "(go.uber.org/zap.SugaredLogger).Warnw",
                "(go.uber.org/zap.SugaredLogger).Errorw",
                "(go.uber.org/zap.SugaredLogger).DPanicw",
                "(go.uber.org/zap.SugaredLogger).Panicw",
                "(go.uber.org/zap.SugaredLogger).Fatalw",
                "go.uber.org/zap.S",
                "go.uber.org/zap.L",
            ],
        ),
    ]
});

/// Names of the built-in checkers, in registration order.
pub fn builtin_names() -> Vec<&'static str> {
    BUILTIN_CHECKERS.iter().map(|c| c.name.as_str()).collect()
}
