//! Illustrative code shown inside the accordions. Displayed as text only.

pub const FABRIC_TRAINER: &str = r"class FabricDefectTrainer:
    def _train_epoch(self) -> Dict[str, float]:
        self.model.train()

        for batch_idx, (images, labels) in enumerate(pbar):
            # MixUp/CutMix Augmentation
            images, labels_a, labels_b, lam = self._mixup_cutmix(images, labels)

            # Mixed Precision Forward
            with self.mp_trainer.autocast_context():
                outputs = self.model(images)
                loss = lam * self.criterion(outputs, labels_a) + \
                       (1 - lam) * self.criterion(outputs, labels_b)

            # Gradient Accumulation
            if self.mp_trainer.accumulator.backward(loss):
                self.mp_trainer.accumulator.step()
                self.scheduler.step()";

pub const EDGE_INFERENCE: &str = r"class EdgeInferenceEngine:
    def _create_session(self) -> ort.InferenceSession:
        providers = self._get_providers()

        # Hardware specific optimizations
        sess_options = ort.SessionOptions()
        sess_options.graph_optimization_level = \
            ort.GraphOptimizationLevel.ORT_ENABLE_ALL
        sess_options.enable_mem_pattern = True

        return ort.InferenceSession(
            str(self.model_path),
            sess_options,
            providers=providers
        )

    def predict(self, image):
        # Sub-millisecond inference
        start = time.perf_counter()
        outputs = self.session.run(...)
        latency = (time.perf_counter() - start) * 1000
        return self._post_process(outputs, latency)";

pub const RUL_PREDICTOR: &str = r"class RULPredictor(nn.Module):
    def __init__(self, input_size=24, hidden_sizes=[64, 32]):
        super().__init__()
        # Stacked GRU layers for temporal patterns
        self.gru1 = nn.GRU(input_size, hidden_sizes[0], batch_first=True, dropout=0.2)
        self.gru2 = nn.GRU(hidden_sizes[0], hidden_sizes[1], batch_first=True, dropout=0.2)

        # Temporal Attention to weigh critical moments
        self.attention = TemporalAttention(hidden_sizes[1])

        # Regression head for Remaining Useful Life
        self.head = nn.Sequential(
            nn.Linear(hidden_sizes[1], 32),
            nn.ReLU(),
            nn.Linear(32, 1) # Output: Hours remaining
        )

    def forward(self, x):
        x, _ = self.gru1(x)
        x, _ = self.gru2(x)
        x = self.attention(x)
        return self.head(x)";

pub const POWER_DETECTOR: &str = r#"class PowerDetector:
    def detect(self, series):
        # 1. Encode
        repr = self.ts2vec.encode(series)
        # 2. Deviation
        z_score = abs((repr - self.mean) / self.std)
        # 3. Segmentation
        algo = rpt.Pelt(model="rbf").fit(series)
        return z_score.max() > 2.5"#;
