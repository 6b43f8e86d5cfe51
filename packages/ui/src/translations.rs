//! Display strings for every supported language.
//!
//! Both tables must carry the same keys; `i18n::tests` checks it.

pub(crate) const TR: &[(&str, &str)] = &[
    // Page metadata
    ("meta.title", "Musa Emir Doğan | Jr. Bulut & Platform Mühendisi"),
    ("meta.description", "AWS, Kubernetes ve Infrastructure as Code ile ölçeklenebilir bulut altyapıları kuran Jr. Cloud & Platform Engineer Musa Emir Doğan'ın kişisel sitesi."),

    // Language toggle
    ("lang.name", "Türkçe"),
    ("lang.switch", "İngilizce'ye geç"),

    // Navigation
    ("nav.about", "Hakkında"),
    ("nav.experience", "Deneyim"),
    ("nav.skills", "Yetenekler"),
    ("nav.projects", "Projeler"),
    ("nav.publications", "Yayınlar"),
    ("nav.events", "Etkinlikler"),
    ("nav.leadership", "Liderlik"),
    ("nav.education", "Eğitim"),
    ("nav.contact", "İletişim"),
    ("nav.menu", "Menüyü aç/kapat"),

    // Hero
    ("hero.position", "Jr. Cloud & Platform Engineer"),
    ("hero.description", "AWS, Kubernetes ve Infrastructure as Code ile ölçeklenebilir bulut çözümleri geliştirme ve altyapı optimizasyonu"),
    ("hero.contactMe", "İletişime Geç"),

    // About
    ("about.title", "Hakkımda"),
    ("about.role", "Jr. Cloud & Platform Engineer"),
    ("about.intro", "Merhaba! Ben Musa Emir Doğan. Sufle'de Jr. Cloud & Platform Engineer olarak çalışıyorum. AWS production altyapılarını yönetiyor, Kubernetes ortamları kuruyor ve DevOps süreçlerini optimize ediyorum. AWS Certified Cloud Practitioner sertifikasına sahibim."),
    ("about.details", "İstanbul Aydın Üniversitesi'nde Yönetim Bilişim Sistemleri okuyorum ve 42 İstanbul'da yazılım eğitimi aldım. Terraform, Kubernetes, Docker, Machine Learning ve bulut teknolojileri alanlarında uzmanlaşıyorum."),
    ("about.highlight1.title", "AWS Bulut Mühendisliği"),
    ("about.highlight1.desc", "Amazon Web Services mimarisi ve çözümlerinde uzmanlaşma"),
    ("about.highlight2.title", "DevOps Uygulamaları"),
    ("about.highlight2.desc", "Modern DevOps metodolojileri ve otomasyon uygulama"),
    ("about.highlight3.title", "Infrastructure as Code"),
    ("about.highlight3.desc", "Kod aracılığıyla ölçeklenebilir ve sürdürülebilir altyapı inşa etme"),

    // Skills
    ("skills.title", "Teknik Yetenekler"),
    ("skills.subtitle", "DevOps uygulamaları, bulut teknolojileri ve altyapı otomasyonunda sahip olduğum teknik yetenekler"),
    ("skills.cloud", "Bulut Platformları"),
    ("skills.containers", "Konteyner & Orkestrasyon"),
    ("skills.iac", "Altyapı Otomasyonu"),
    ("skills.observability", "İzleme & Loglama"),
    ("skills.programming", "Programlama"),

    // Experience
    ("experience.title", "Profesyonel Deneyim"),
    ("experience.subtitle", "Modern DevOps uygulamaları ile bulut altyapısı inşa etme ve ölçeklendirme"),
    ("experience.sufle.period", "Aralık 2024 - Günümüz"),
    ("experience.sufle.desc1", "Terragrunt kullanarak AWS production altyapısını yönetme ve Infrastructure as Code iş akışlarını optimize etme"),
    ("experience.sufle.desc2", "MSSQL veritabanını EC2'dan Amazon RDS'e migrate ederek operasyonel yükü ve maliyetleri %50 azaltma"),
    ("experience.sufle.desc3", "Sıfırdan Kubernetes ortamı kurma: Karpenter, Metric-Server, Ingress Nginx, AWS Load Balancer Controller ve Cert-Manager entegrasyonu"),
    ("experience.sufle.desc4", "Bitbucket CI/CD pipeline'ları ile AWS ECR entegrasyonu yaparak microservices deployment'ını otomatikleştirme"),
    ("experience.sufle.desc5", "New Relic'te logging, metrics ve alert sistemleri kurma, on-call rotasyonlarda performans izleme"),
    ("experience.renabyte.period", "Temmuz 2024 - Günümüz"),
    ("experience.renabyte.desc1", "Sağlık teknolojileri alanında RenaByte Teknofest takımını kurma ve Co-Founder & Team Lead olarak yönetme"),
    ("experience.renabyte.desc2", "TEKNOFEST 2025 İnsanlık Yararına Teknoloji yarışmasında İstanbul 1., genel 7. sırada yarı finale çıkma"),
    ("experience.renabyte.desc3", "8 kişilik multidisipliner takımın tüm cloud altyapısını tasarlama ve yönetme (renabyte.com)"),
    ("experience.ybs.period", "Haziran 2024 - Eylül 2024"),
    ("experience.ybs.desc1", "SQL sorguları kullanarak yapılandırılmış verileri analiz etme ve manipüle etme"),
    ("experience.ybs.desc2", "BeautifulSoup ve Selenium ile web scraping yaparak veri çıkarma ve analiz süreçlerini gerçekleştirme"),
    ("experience.ybs.desc3", "Python tabanlı araçlar kullanarak rutin görevleri ve veri toplama süreçlerini otomatikleştirme"),
    ("experience.etruskai.period", "Şubat 2024 - Mayıs 2024"),
    ("experience.etruskai.desc1", "Kaggle yarışması için DeBERTa mimarisine dayalı büyük dil modeli (LLM) geliştirme ve fine-tune etme"),
    ("experience.etruskai.desc2", "Metin verilerinde Kişisel Tanımlanabilir Bilgileri (PII) tespit etmek ve çıkarmak için model oluşturma"),

    // Projects
    ("projects.title", "Projeler"),
    ("projects.subtitle", "Geliştirdiğim web siteleri, uygulamalar ve açık kaynak projeler"),
    ("projects.renabyte.desc", "Teknolojiyle umudu yeniden canlandıran sağlık teknolojileri projesi. RenaByte takım web sitesi."),
    ("projects.sunoa.desc", "Premium güneş kremi ürünleri için modern e-ticaret platformu. Next.js 15, React 19 ve TypeScript ile geliştirildi."),
    ("projects.minikube2048.desc", "Minikube üzerinde Kubernetes ile 2048 oyun dağıtımı. Helm ile güvenli secret entegrasyonu içerir."),
    ("projects.terraform.desc", "Terraform ile yönetilen mimari tasarım. Uygulamalar özel subnet'lerde güvenli çalışır, NAT gateway ve load balancer ile."),
    ("projects.webscraping.desc", "Beautiful Soup ve Selenium ile web scraping rehberi. XPath ve CSS selector'ları içerir."),
    ("projects.42piscine.desc", "Ecole 42'nin piscine eğitiminden C, C++, shell scripting ve embedded sistem projeleri."),
    ("projects.viewMore", "Tüm Projeleri GitHub'da Görüntüle"),

    // Publications
    ("publications.title", "Yayınlar"),
    ("publications.subtitle", "Bulut teknolojileri, DevOps uygulamaları ve makine öğrenimi konularında bilgi ve deneyim paylaşımı"),
    ("publications.serverless.desc", "AWS Serverless teknolojilerine giriş rehberi. Lambda, API Gateway ve diğer serverless servislerin temel kullanımları."),
    ("publications.tfstate.desc", "Terraform state dosyasının ne olduğu ve farklı yapılandırma yöntemlerinin detaylı açıklaması."),
    ("publications.confusion.desc", "Makine öğrenimi modellerinin performansını değerlendirmek için kullanılan Confusion Matrix'in detaylı açıklaması."),

    // Events
    ("events.title", "Etkinlikler"),
    ("events.subtitle", "Konuşmacı, organizatör ve katılımcı olarak yer aldığım etkinlikler"),
    ("events.type.speaker", "Konuşmacı"),
    ("events.type.organizer", "Organizatör"),
    ("events.type.participant", "Katılımcı"),
    ("events.druludag.title", "Bulut Kariyerine Giriş"),
    ("events.druludag.desc", "Uludağ Üniversitesi Veri Bilimi Topluluğu için bulut mühendisliği ve kariyer yolları üzerine çevrimiçi konuşma."),
    ("events.buildwithai.title", "Build with AI"),
    ("events.buildwithai.desc", "GDSC topluluğu ile Google yapay zeka araçları üzerine uygulamalı konuşma ve atölye."),
    ("events.teknofest.title", "TEKNOFEST 2025 Yarı Finali"),
    ("events.teknofest.desc", "RenaByte takımı ile İnsanlık Yararına Teknoloji kategorisinde yarı final sunumu."),

    // Leadership
    ("leadership.title", "Liderlik & Topluluk"),
    ("leadership.subtitle", "Teknoloji topluluklarına liderlik etme, inovasyonu teşvik etme ve işbirlikçi takımlar kurma"),
    ("leadership.renabyte.desc1", "RenaByte Teknofest takımını kurarak sağlık teknolojileri alanında liderlik"),
    ("leadership.renabyte.desc2", "Web, mobil, backend, veritabanı ve araştırma ekibini yönetme"),
    ("leadership.gdsc.desc1", "Google Developer Student Clubs Co-Lead olarak öğrenci topluluğunu yönetme ve büyütme"),
    ("leadership.gdsc.desc2", "Coffee Talk etkinlikleri, buluşmalar ve Cloud Horizon içerik üretimi organize etme"),
    ("leadership.t3ai.desc1", "Türkiye'nin yerli üretken yapay zeka modellerinin geliştirilmesine katkı"),
    ("leadership.t3ai.desc2", "Topluluk etkinlikleri ve bilgi paylaşım platformları organize etme"),

    // Education
    ("education.title", "Eğitim & Sertifikalar"),
    ("education.subtitle", "Bulut ve güvenlik alanlarında akademik geçmiş ve profesyonel sertifikalar"),
    ("education.education", "Eğitim"),
    ("education.certifications", "Profesyonel Sertifikalar"),
    ("education.iau.degree", "Lisans Derecesi - Yönetim Bilişim Sistemleri"),
    ("education.iau.period", "2022 - Günümüz"),
    ("education.42.period", "Ağustos 2023 - Kasım 2024"),
    ("education.aws.period", "Nisan 2025 - Nisan 2028"),

    // Contact
    ("contact.title", "İletişime Geçin"),
    ("contact.subtitle", "Bu platformlardan herhangi biri aracılığıyla bana ulaşmaktan çekinmeyin"),
    ("contact.downloadResume", "CV İndir"),

    // Footer
    ("footer.rights", "Tüm hakları saklıdır."),

    // Common
    ("common.readMore", "Devamını Oku"),
    ("common.viewProject", "Projeyi Görüntüle"),
    ("common.liveSite", "Canlı Site"),
    ("common.external", "Harici Link"),
    ("common.english", "İngilizce"),
    ("common.location.istanbul", "İstanbul, Türkiye"),
    ("common.location.online", "Çevrimiçi"),
];

pub(crate) const EN: &[(&str, &str)] = &[
    // Page metadata
    ("meta.title", "Musa Emir Doğan | Jr. Cloud & Platform Engineer"),
    ("meta.description", "Personal site of Musa Emir Doğan, a Jr. Cloud & Platform Engineer building scalable cloud infrastructure with AWS, Kubernetes and Infrastructure as Code."),

    // Language toggle
    ("lang.name", "English"),
    ("lang.switch", "Switch to Turkish"),

    // Navigation
    ("nav.about", "About"),
    ("nav.experience", "Experience"),
    ("nav.skills", "Skills"),
    ("nav.projects", "Projects"),
    ("nav.publications", "Publications"),
    ("nav.events", "Events"),
    ("nav.leadership", "Leadership"),
    ("nav.education", "Education"),
    ("nav.contact", "Contact"),
    ("nav.menu", "Toggle menu"),

    // Hero
    ("hero.position", "Jr. Cloud & Platform Engineer"),
    ("hero.description", "Building scalable cloud solutions and optimizing infrastructure with AWS, Kubernetes, and Infrastructure as Code"),
    ("hero.contactMe", "Contact Me"),

    // About
    ("about.title", "About Me"),
    ("about.role", "Jr. Cloud & Platform Engineer"),
    ("about.intro", "Hello! I'm Musa Emir Doğan. I work as a Jr. Cloud & Platform Engineer at Sufle. I manage AWS production infrastructures, set up Kubernetes environments, and optimize DevOps processes. I hold the AWS Certified Cloud Practitioner certification."),
    ("about.details", "I study Management Information Systems at Istanbul Aydın University and completed software training at 42 Istanbul. I specialize in Terraform, Kubernetes, Docker, Machine Learning, and cloud technologies."),
    ("about.highlight1.title", "AWS Cloud Engineering"),
    ("about.highlight1.desc", "Specializing in Amazon Web Services architecture and solutions"),
    ("about.highlight2.title", "DevOps Practices"),
    ("about.highlight2.desc", "Implementing modern DevOps methodologies and automation"),
    ("about.highlight3.title", "Infrastructure as Code"),
    ("about.highlight3.desc", "Building scalable and maintainable infrastructure through code"),

    // Skills
    ("skills.title", "Technical Skills"),
    ("skills.subtitle", "Technical skills in DevOps practices, cloud technologies, and infrastructure automation"),
    ("skills.cloud", "Cloud Platforms"),
    ("skills.containers", "Containers & Orchestration"),
    ("skills.iac", "Infrastructure Automation"),
    ("skills.observability", "Monitoring & Logging"),
    ("skills.programming", "Programming"),

    // Experience
    ("experience.title", "Professional Experience"),
    ("experience.subtitle", "Building and scaling cloud infrastructure with modern DevOps practices"),
    ("experience.sufle.period", "December 2024 - Present"),
    ("experience.sufle.desc1", "Managed AWS production infrastructure using Terragrunt and optimized Infrastructure as Code workflows"),
    ("experience.sufle.desc2", "Migrated an MSSQL database from EC2 to Amazon RDS, reducing operational overhead and costs by 50%"),
    ("experience.sufle.desc3", "Built a Kubernetes environment from scratch: Karpenter, Metric-Server, Ingress Nginx, AWS Load Balancer Controller, and Cert-Manager integration"),
    ("experience.sufle.desc4", "Automated microservices deployment via Bitbucket CI/CD pipelines integrated with AWS ECR"),
    ("experience.sufle.desc5", "Implemented logging, metrics, and alert systems in New Relic, taking part in on-call rotations for performance monitoring"),
    ("experience.renabyte.period", "July 2024 - Present"),
    ("experience.renabyte.desc1", "Founded the RenaByte Teknofest team in the health technology sector, serving as Co-Founder & Team Lead"),
    ("experience.renabyte.desc2", "Reached the TEKNOFEST 2025 semi-finals: 1st in Istanbul, 7th overall in Technology for Humanity"),
    ("experience.renabyte.desc3", "Designed and managed the entire cloud infrastructure for an 8-person multidisciplinary team (renabyte.com)"),
    ("experience.ybs.period", "June 2024 - September 2024"),
    ("experience.ybs.desc1", "Analyzing and manipulating structured data using SQL queries"),
    ("experience.ybs.desc2", "Performing data extraction and analysis through web scraping with BeautifulSoup and Selenium"),
    ("experience.ybs.desc3", "Automating routine tasks and data collection processes using Python-based tools"),
    ("experience.etruskai.period", "February 2024 - May 2024"),
    ("experience.etruskai.desc1", "Built and fine-tuned a large language model (LLM) based on the DeBERTa architecture for a Kaggle competition"),
    ("experience.etruskai.desc2", "Developed a model to detect and extract Personally Identifiable Information (PII) in text data"),

    // Projects
    ("projects.title", "Projects"),
    ("projects.subtitle", "Websites, applications, and open source projects I've developed"),
    ("projects.renabyte.desc", "Healthcare technology project that revives hope through technology. The RenaByte team website."),
    ("projects.sunoa.desc", "Modern e-commerce platform for premium sunscreen products. Built with Next.js 15, React 19, and TypeScript."),
    ("projects.minikube2048.desc", "2048 game deployment with Kubernetes on Minikube. Includes secure secret integration using Helm."),
    ("projects.terraform.desc", "Terraform-managed architecture where applications run in private subnets behind a NAT gateway and a load balancer."),
    ("projects.webscraping.desc", "Web scraping guide with Beautiful Soup and Selenium. Covers XPath and CSS selectors."),
    ("projects.42piscine.desc", "C, C++, shell scripting and embedded systems projects from Ecole 42's piscine training."),
    ("projects.viewMore", "View All Projects on GitHub"),

    // Publications
    ("publications.title", "Publications"),
    ("publications.subtitle", "Sharing knowledge and experiences in cloud technologies, DevOps practices, and machine learning"),
    ("publications.serverless.desc", "An introduction to AWS serverless technologies: the basics of Lambda, API Gateway and other serverless services."),
    ("publications.tfstate.desc", "What the Terraform state file is and the different ways it can be configured."),
    ("publications.confusion.desc", "A detailed explanation of the confusion matrix used to evaluate machine learning classifiers."),

    // Events
    ("events.title", "Events"),
    ("events.subtitle", "Events I joined as a speaker, organizer and participant"),
    ("events.type.speaker", "Speaker"),
    ("events.type.organizer", "Organizer"),
    ("events.type.participant", "Participant"),
    ("events.druludag.title", "Getting Started with a Cloud Career"),
    ("events.druludag.desc", "Online talk on cloud engineering and career paths for the Uludağ University Data Science Community."),
    ("events.buildwithai.title", "Build with AI"),
    ("events.buildwithai.desc", "Hands-on talk and workshop on Google AI tooling with the GDSC community."),
    ("events.teknofest.title", "TEKNOFEST 2025 Semi-Finals"),
    ("events.teknofest.desc", "Semi-final presentation with the RenaByte team in the Technology for Humanity category."),

    // Leadership
    ("leadership.title", "Leadership & Community"),
    ("leadership.subtitle", "Leading technology communities, fostering innovation and building collaborative teams"),
    ("leadership.renabyte.desc1", "Founded the RenaByte Teknofest team, leading health technology innovation"),
    ("leadership.renabyte.desc2", "Managed web, mobile, backend, database and research team members"),
    ("leadership.gdsc.desc1", "Served as Google Developer Student Clubs Co-Lead, managing and growing the student community"),
    ("leadership.gdsc.desc2", "Organized Coffee Talk events, meetups, and Cloud Horizon content production"),
    ("leadership.t3ai.desc1", "Contributing to the development of Turkey's indigenous generative AI models"),
    ("leadership.t3ai.desc2", "Organizing community events and knowledge sharing platforms"),

    // Education
    ("education.title", "Education & Certifications"),
    ("education.subtitle", "Academic background and professional certifications in cloud and security"),
    ("education.education", "Education"),
    ("education.certifications", "Professional Certifications"),
    ("education.iau.degree", "Bachelor's Degree - Management Information Systems"),
    ("education.iau.period", "2022 - Present"),
    ("education.42.period", "August 2023 - November 2024"),
    ("education.aws.period", "April 2025 - April 2028"),

    // Contact
    ("contact.title", "Get in Touch"),
    ("contact.subtitle", "Feel free to reach out through any of these platforms"),
    ("contact.downloadResume", "Download Resume"),

    // Footer
    ("footer.rights", "All rights reserved."),

    // Common
    ("common.readMore", "Read More"),
    ("common.viewProject", "View Project"),
    ("common.liveSite", "Live Site"),
    ("common.external", "External Link"),
    ("common.english", "English"),
    ("common.location.istanbul", "Istanbul, Turkey"),
    ("common.location.online", "Online"),
];
